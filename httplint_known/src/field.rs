//! Case-insensitive header field names
//!
//! Two field names denote the same header iff they are equal under
//! ASCII case folding; equality, hashing and ordering all fold, while
//! `Display` and `as_str` preserve the spelling the name was built
//! with so diagnostics can echo what was actually on the wire.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A header field name with case-insensitive identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as originally spelled
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ASCII case-folded form used as registry identity
    pub fn folded(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl PartialEq for FieldName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for FieldName {}

impl Hash for FieldName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl PartialOrd for FieldName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .bytes()
            .map(|b| b.to_ascii_lowercase())
            .cmp(other.0.bytes().map(|b| b.to_ascii_lowercase()))
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn identity_folds_ascii_case() {
        assert_eq!(FieldName::from("ETag"), FieldName::from("etag"));
        assert_eq!(FieldName::from("CONTENT-LENGTH"), FieldName::from("Content-Length"));
        assert_ne!(FieldName::from("ETag"), FieldName::from("Expires"));
    }

    #[test]
    fn hashing_agrees_with_equality() {
        let mut map = HashMap::new();
        map.insert(FieldName::from("Cache-Control"), 1);
        assert_eq!(map.get(&FieldName::from("cache-control")), Some(&1));
        assert_eq!(map.get(&FieldName::from("CACHE-CONTROL")), Some(&1));
    }

    #[test]
    fn display_preserves_original_spelling() {
        assert_eq!(FieldName::from("X-FRAME-Options").to_string(), "X-FRAME-Options");
    }

    #[test]
    fn ordering_is_case_insensitive() {
        let mut names = vec![FieldName::from("b"), FieldName::from("A"), FieldName::from("C")];
        names.sort();
        let sorted: Vec<&str> = names.iter().map(FieldName::as_str).collect();
        assert_eq!(sorted, vec!["A", "b", "C"]);
    }
}
