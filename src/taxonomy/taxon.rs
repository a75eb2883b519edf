//! Taxon — a named node in a taxonomic hierarchy

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque taxon label, unique within a hierarchy.
///
/// Labels are compared exactly (case-sensitive). `Borrow<str>` lets maps keyed
/// by `Taxon` be queried with plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxon(String);

impl Taxon {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Taxon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Taxon {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Taxon {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Taxon {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Taxon {
    fn from(label: String) -> Self {
        Self(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_str_lookup() {
        let mut map = HashMap::new();
        map.insert(Taxon::from("Primates"), 1);
        assert_eq!(map.get("Primates"), Some(&1));
        assert_eq!(map.get("primates"), None);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Taxon::new("Pan troglodytes")).unwrap();
        assert_eq!(json, "\"Pan troglodytes\"");
    }
}
