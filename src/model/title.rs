//! Document titles.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A title names a document and is the key mentions resolve against.
///
/// Surrounding whitespace is not significant: `Title::new("  Garden ")`
/// and `Title::new("Garden")` are the same title. Comparison is otherwise
/// exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Creates a new Title, trimming surrounding whitespace.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.len() == title.len() {
            Self(title)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the title is empty after trimming.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Title {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Title {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Title {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let title = Title::new("  Gardening \n");
        assert_eq!(title.as_str(), "Gardening");
        assert_eq!(title, Title::new("Gardening"));
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(Title::new("garden"), Title::new("Garden"));
    }

    #[test]
    fn test_empty() {
        assert!(Title::new("   ").is_empty());
        assert!(!Title::new("x").is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Title::new("Reading list")), "Reading list");
    }

    #[test]
    fn test_serde_trims() {
        let title: Title = serde_json::from_str("\" Tea \"").unwrap();
        assert_eq!(title.as_str(), "Tea");
        assert_eq!(serde_json::to_string(&title).unwrap(), "\"Tea\"");
    }
}
