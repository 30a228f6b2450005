//! Resource identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier value a representor extracts from a model instance.
///
/// Passed, together with its [`IdentifierKind`] and the model type, to the
/// injected path resolver. The writer never interprets identifiers itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// Numeric identifier.
    Number(i64),
    /// Textual identifier.
    Text(String),
}

impl Identifier {
    /// The kind of this identifier value.
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Identifier::Number(_) => IdentifierKind::Number,
            Identifier::Text(_) => IdentifierKind::Text,
        }
    }

    /// The identifier rendered as a URL path segment.
    pub fn as_segment(&self) -> String {
        match self {
            Identifier::Number(n) => n.to_string(),
            Identifier::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{}", n),
            Identifier::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(n: i64) -> Self {
        Identifier::Number(n)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier::Text(s)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Text(s.to_string())
    }
}

/// The declared kind of a model type's identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Identifiers are numeric.
    Number,
    /// Identifiers are strings.
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Identifier::Number(7).kind(), IdentifierKind::Number);
        assert_eq!(Identifier::from("abc").kind(), IdentifierKind::Text);
    }

    #[test]
    fn segment_rendering() {
        assert_eq!(Identifier::Number(42).as_segment(), "42");
        assert_eq!(Identifier::Text("alice".into()).as_segment(), "alice");
    }
}
