//! The token tree.
//!
//! Source documents are nested JSON objects. An object carrying a `$value`
//! key is a leaf token; any other object is a category. The distinction is
//! resolved once, in [`TokenNode::from_json`], so traversal never has to
//! re-inspect raw JSON.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::path::TokenPath;

/// The key that turns an object into a leaf token.
pub const VALUE_KEY: &str = "$value";

/// A structural problem in a token document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed token document at `{path}`: {reason}")]
pub struct MalformedTokens {
    path: String,
    reason: String,
}

impl MalformedTokens {
    #[must_use]
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Dotted path to the offending node (`<root>` for the document itself).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A leaf design token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    value: String,
}

impl Token {
    /// Build a token; surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self {
            value: value.as_ref().trim().to_string(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A node in a token document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenNode {
    Leaf(Token),
    Category(Category),
}

impl TokenNode {
    /// Classify a JSON value.
    ///
    /// Returns `Ok(None)` for shapes that carry no tokens (strings, numbers,
    /// arrays or null sitting where a category was expected). Those branches
    /// emit nothing.
    pub fn from_json(value: &Value, path: &[&str]) -> Result<Option<Self>, MalformedTokens> {
        let Value::Object(object) = value else {
            return Ok(None);
        };

        if let Some(raw) = object.get(VALUE_KEY) {
            let text = leaf_text(raw).ok_or_else(|| {
                let mut leaf_path = path.to_vec();
                leaf_path.push(VALUE_KEY);
                MalformedTokens::new(
                    display_path(&leaf_path),
                    format!("expected a string, number or boolean, found {}", kind(raw)),
                )
            })?;
            return Ok(Some(TokenNode::Leaf(Token::new(text))));
        }

        Category::from_object(object, path).map(|category| Some(TokenNode::Category(category)))
    }

    #[must_use]
    pub fn as_category(&self) -> Option<&Category> {
        match self {
            TokenNode::Category(category) => Some(category),
            TokenNode::Leaf(_) => None,
        }
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&Token> {
        match self {
            TokenNode::Leaf(token) => Some(token),
            TokenNode::Category(_) => None,
        }
    }

    /// Number of leaf tokens at or below this node.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            TokenNode::Leaf(_) => 1,
            TokenNode::Category(category) => category.leaf_count(),
        }
    }
}

/// An ordered group of child nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    children: IndexMap<String, TokenNode>,
}

impl Category {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document root. Unlike nested nodes, the root must be an object.
    pub fn from_root(value: &Value) -> Result<Self, MalformedTokens> {
        match value {
            Value::Object(object) if !object.contains_key(VALUE_KEY) => {
                Self::from_object(object, &[])
            }
            Value::Object(_) => Err(MalformedTokens::new(
                display_path(&[]),
                "document root must be a group of tokens, not a single token",
            )),
            other => Err(MalformedTokens::new(
                display_path(&[]),
                format!("expected an object, found {}", kind(other)),
            )),
        }
    }

    fn from_object(object: &Map<String, Value>, path: &[&str]) -> Result<Self, MalformedTokens> {
        let mut children = IndexMap::with_capacity(object.len());
        for (key, child) in object {
            let mut child_path = path.to_vec();
            child_path.push(key);
            if let Some(node) = TokenNode::from_json(child, &child_path)? {
                children.insert(key.clone(), node);
            }
        }
        Ok(Self { children })
    }

    /// Append a child, keeping insertion order.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, node: TokenNode) -> Self {
        self.children.insert(key.into(), node);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.children.get(key)
    }

    /// Resolve a dotted path relative to this category.
    #[must_use]
    pub fn lookup(&self, path: &TokenPath) -> Option<&TokenNode> {
        let mut segments = path.segments();
        let first = segments.next()?;
        let mut node = self.children.get(first)?;
        for segment in segments {
            node = node.as_category()?.children.get(segment)?;
        }
        Some(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenNode)> {
        self.children.iter().map(|(key, node)| (key.as_str(), node))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.children.values().map(TokenNode::leaf_count).sum()
    }
}

impl From<Token> for TokenNode {
    fn from(token: Token) -> Self {
        TokenNode::Leaf(token)
    }
}

impl From<Category> for TokenNode {
    fn from(category: Category) -> Self {
        TokenNode::Category(category)
    }
}

fn leaf_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn display_path(path: &[&str]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}
