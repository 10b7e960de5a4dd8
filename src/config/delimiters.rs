//! Delimiters for mention and macro syntax.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SmalltextError};

/// Delimiter strings recognized by the scanner and the macro engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    /// Opens a mention of another document.
    #[serde(default = "default_mention_open")]
    pub mention_open: String,

    /// Closes a mention.
    #[serde(default = "default_mention_close")]
    pub mention_close: String,

    /// Opens a macro invocation.
    #[serde(default = "default_macro_open")]
    pub macro_open: String,

    /// Closes a macro invocation.
    #[serde(default = "default_macro_close")]
    pub macro_close: String,
}

fn default_mention_open() -> String {
    "[[".to_string()
}

fn default_mention_close() -> String {
    "]]".to_string()
}

fn default_macro_open() -> String {
    "{{".to_string()
}

fn default_macro_close() -> String {
    "}}".to_string()
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            mention_open: default_mention_open(),
            mention_close: default_mention_close(),
            macro_open: default_macro_open(),
            macro_close: default_macro_close(),
        }
    }
}

impl Delimiters {
    /// Creates a new Delimiters configuration.
    pub fn new(mention_open: &str, mention_close: &str, macro_open: &str, macro_close: &str) -> Self {
        Self {
            mention_open: mention_open.to_string(),
            mention_close: mention_close.to_string(),
            macro_open: macro_open.to_string(),
            macro_close: macro_close.to_string(),
        }
    }

    /// Checks that every delimiter is non-empty and that the two syntaxes
    /// cannot be confused.
    ///
    /// Neither opening delimiter may be a prefix of the other, otherwise the
    /// start of a macro could be read as the start of a mention.
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("mention_open", &self.mention_open),
            ("mention_close", &self.mention_close),
            ("macro_open", &self.macro_open),
            ("macro_close", &self.macro_close),
        ];
        for (name, value) in all {
            if value.is_empty() {
                return Err(SmalltextError::InvalidDelimiters(format!(
                    "{} must not be empty",
                    name
                )));
            }
        }

        if self.mention_open.starts_with(&self.macro_open)
            || self.macro_open.starts_with(&self.mention_open)
        {
            return Err(SmalltextError::InvalidDelimiters(format!(
                "mention_open {:?} and macro_open {:?} overlap",
                self.mention_open, self.macro_open
            )));
        }
        Ok(())
    }
}
