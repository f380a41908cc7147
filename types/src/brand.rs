//! Brand identifiers and documents.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use crate::token::{Category, MalformedTokens, TokenNode};

/// Key under which a brand document keeps its tokens.
pub const BRAND_KEY: &str = "brand";

/// The brand used when none is given on the command line.
pub const DEFAULT_BRAND: &str = "echo";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid brand identifier '{0}'; use lowercase letters, digits, '-' or '_'"
)]
pub struct InvalidBrandId(String);

/// A validated brand identifier.
///
/// Brand ids become file names, so anything outside `[a-z0-9_-]` is refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrandId(String);

impl BrandId {
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidBrandId> {
        let raw = raw.into();
        let valid = !raw.is_empty()
            && raw
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');
        if valid { Ok(Self(raw)) } else { Err(InvalidBrandId(raw)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BrandId {
    fn default() -> Self {
        Self(DEFAULT_BRAND.to_string())
    }
}

impl FromStr for BrandId {
    type Err = InvalidBrandId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A brand-agnostic token document (the global foundation tokens).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenDocument {
    root: Category,
}

impl TokenDocument {
    #[must_use]
    pub fn new(root: Category) -> Self {
        Self { root }
    }

    pub fn from_json(value: &Value) -> Result<Self, MalformedTokens> {
        Category::from_root(value).map(Self::new)
    }

    #[must_use]
    pub fn root(&self) -> &Category {
        &self.root
    }
}

/// A brand token document: `{ "brand": { ... } }`.
///
/// The whole document is flattened; the `brand` category additionally feeds
/// the alias registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandDocument {
    root: Category,
}

impl BrandDocument {
    pub fn new(root: Category) -> Result<Self, MalformedTokens> {
        match root.get(BRAND_KEY) {
            Some(TokenNode::Category(_)) => Ok(Self { root }),
            Some(TokenNode::Leaf(_)) => Err(MalformedTokens::new(
                BRAND_KEY,
                "brand tokens must be a group, not a single token",
            )),
            None => Err(MalformedTokens::new(
                "<root>",
                format!("missing top-level `{BRAND_KEY}` group"),
            )),
        }
    }

    pub fn from_json(value: &Value) -> Result<Self, MalformedTokens> {
        Category::from_root(value).and_then(Self::new)
    }

    #[must_use]
    pub fn root(&self) -> &Category {
        &self.root
    }

    /// The `brand` category. Always present once constructed.
    #[must_use]
    pub fn brand(&self) -> &Category {
        match self.root.get(BRAND_KEY) {
            Some(TokenNode::Category(category)) => category,
            _ => unreachable!("BrandDocument::new checks the brand group"),
        }
    }
}
