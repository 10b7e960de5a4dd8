//! Document types.

use serde::{Deserialize, Serialize};

/// Which parsing rules apply to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Mentions only; macro syntax is kept as literal text.
    #[default]
    Lite,

    /// Mentions and macro expansion.
    Extended,
}

impl DocumentType {
    /// Returns true if macros are expanded for this type.
    pub fn allows_macros(&self) -> bool {
        matches!(self, DocumentType::Extended)
    }

    /// Returns the type name as a static string.
    pub fn name(&self) -> &'static str {
        match self {
            DocumentType::Lite => "lite",
            DocumentType::Extended => "extended",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lite" | "restricted" => Ok(DocumentType::Lite),
            "extended" | "unrestricted" => Ok(DocumentType::Extended),
            _ => Err(format!("Unknown document type: {}", s)),
        }
    }
}
