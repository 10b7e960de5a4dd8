//! Error types for the smalltext engine.

use thiserror::Error;

use crate::model::{DocumentId, Title};
use crate::text_location::TextLocation;

/// Main error type for smalltext operations.
///
/// Parsing itself never fails: every string degrades to plain text. These
/// errors cover document-set bookkeeping, configuration and loading.
#[derive(Error, Debug)]
pub enum SmalltextError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Parse error at {location}: {message}")]
    Parse { location: TextLocation, message: String },

    #[error("Document title must not be empty")]
    EmptyTitle,

    #[error("A document titled '{0}' already exists")]
    DuplicateTitle(Title),

    #[error("No document with id {0}")]
    DocumentNotFound(DocumentId),

    #[error("No document titled '{0}'")]
    TitleNotFound(Title),

    #[error("Invalid delimiters: {0}")]
    InvalidDelimiters(String),

    #[error("Invalid macro name: {0:?}")]
    InvalidMacroName(String),

    #[error("Unsupported parser version: {0}")]
    UnsupportedParserVersion(u32),

    #[error("Link graph inconsistent: {0}")]
    Inconsistent(String),
}

/// Result type alias for smalltext operations.
pub type Result<T> = std::result::Result<T, SmalltextError>;
