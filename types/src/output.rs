//! Records emitted by the compiler.

use std::fmt;

/// One `--name: value;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedVariable {
    pub name: String,
    pub value: String,
}

impl FlattenedVariable {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for FlattenedVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

/// A legacy variable name redirected to a canonical one.
///
/// Only names are stored, so the right-hand side can only ever be a
/// `var(...)` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    legacy: String,
    canonical: String,
}

impl AliasRecord {
    /// Both arguments are custom property names including the `--` sigil.
    #[must_use]
    pub fn new(legacy: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            legacy: legacy.into(),
            canonical: canonical.into(),
        }
    }

    #[must_use]
    pub fn legacy(&self) -> &str {
        &self.legacy
    }

    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// `var(--canonical)`
    #[must_use]
    pub fn reference(&self) -> String {
        format!("var({})", self.canonical)
    }
}

impl fmt::Display for AliasRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: var({});", self.legacy, self.canonical)
    }
}

/// A line in the compatibility block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasLine {
    /// A `/* label */` section header.
    Section(String),
    Alias(AliasRecord),
}

impl AliasLine {
    #[must_use]
    pub fn as_alias(&self) -> Option<&AliasRecord> {
        match self {
            AliasLine::Alias(record) => Some(record),
            AliasLine::Section(_) => None,
        }
    }
}

impl fmt::Display for AliasLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasLine::Section(label) => write!(f, "/* {label} */"),
            AliasLine::Alias(record) => fmt::Display::fmt(record, f),
        }
    }
}
