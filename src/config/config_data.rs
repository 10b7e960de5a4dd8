//! Configuration data structures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::delimiters::Delimiters;
use crate::errors::Result;
use crate::model::DocumentType;
use crate::parser::{MacroTable, ParserVersion};

/// Main configuration structure for smalltext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Version of the configuration format.
    #[serde(default = "default_version")]
    pub version: String,

    /// Glob patterns for document files.
    #[serde(default = "default_source_patterns")]
    pub source_patterns: Vec<String>,

    /// Type given to documents that do not declare one.
    #[serde(default)]
    pub default_type: DocumentType,

    /// Parser version for documents that do not declare one.
    #[serde(default)]
    pub parser_version: ParserVersion,

    /// Mention and macro delimiters.
    #[serde(default)]
    pub delimiters: Delimiters,

    /// Macro definitions for extended documents.
    #[serde(default)]
    pub macros: MacroTable,

    /// Additional custom settings.
    #[serde(default, flatten)]
    pub extra: HashMap<String, toml::Value>,
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_source_patterns() -> Vec<String> {
    vec!["**/*.stxt".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            source_patterns: default_source_patterns(),
            default_type: DocumentType::default(),
            parser_version: ParserVersion::default(),
            delimiters: Delimiters::default(),
            macros: MacroTable::default(),
            extra: HashMap::new(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks delimiters and macro names.
    pub fn validate(&self) -> Result<()> {
        self.delimiters.validate()?;
        self.macros.validate()
    }

    /// Returns all source patterns.
    pub fn source_patterns(&self) -> &[String] {
        &self.source_patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.source_patterns, vec!["**/*.stxt"]);
        assert_eq!(config.default_type, DocumentType::Lite);
        assert_eq!(config.parser_version, ParserVersion::V0);
        assert!(config.macros.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_keys_kept() {
        let config: Config = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(
            config.extra.get("theme").and_then(|v| v.as_str()),
            Some("dark")
        );
    }

    #[test]
    fn test_validate_rejects_bad_macro() {
        let config: Config = toml::from_str("[macros]\n\"two words\" = \"x\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut config = Config::default();
        config.macros.define("sig", "-- me").unwrap();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.version, config.version);
        assert_eq!(parsed.macros.get("sig"), Some("-- me"));
    }
}
