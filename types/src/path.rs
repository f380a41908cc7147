//! Dotted token paths and CSS variable naming.

use std::fmt;

/// A dotted path into a token tree, e.g. `primary.sky-blue`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenPath(String);

impl TokenPath {
    /// Empty segments are dropped, so `"a..b"` and `"a.b"` are the same path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let joined = raw
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        Self(joined)
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|segment| !segment.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS custom property name for this path under `prefix`.
    #[must_use]
    pub fn variable_name(&self, prefix: &str) -> String {
        variable_name(prefix, self.segments())
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join `prefix` and `segments` with dashes and add the `--` sigil.
///
/// An empty prefix contributes nothing: `("", [a, b])` is `--a-b`.
#[must_use]
pub fn variable_name<'a>(prefix: &str, segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut name = String::from("--");
    name.push_str(prefix);
    for segment in segments {
        if name.len() > 2 {
            name.push('-');
        }
        name.push_str(segment);
    }
    name
}
