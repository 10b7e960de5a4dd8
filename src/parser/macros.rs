//! Macro table and single-pass macro expansion.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::Delimiters;
use crate::errors::{Result, SmalltextError};
use crate::model::Title;

/// Valid macro names: an identifier, optionally with `.` or `-` separators.
static MACRO_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.-]*$").unwrap());

/// Name of the built-in macro expanding to the document's own title.
pub const TITLE_MACRO: &str = "title";

/// Macro definitions: name to expansion text, in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacroTable {
    definitions: IndexMap<String, String>,
}

impl MacroTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or redefines) a macro.
    pub fn define(&mut self, name: impl Into<String>, expansion: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !MACRO_NAME.is_match(&name) {
            return Err(SmalltextError::InvalidMacroName(name));
        }
        self.definitions.insert(name, expansion.into());
        Ok(())
    }

    /// Builder-style [`define`](Self::define).
    pub fn with(mut self, name: impl Into<String>, expansion: impl Into<String>) -> Result<Self> {
        self.define(name, expansion)?;
        Ok(self)
    }

    /// Looks up a macro's expansion.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.definitions.get(name).map(String::as_str)
    }

    /// Checks every name, for tables that came from deserialization.
    pub fn validate(&self) -> Result<()> {
        match self.definitions.keys().find(|name| !MACRO_NAME.is_match(name)) {
            Some(bad) => Err(SmalltextError::InvalidMacroName(bad.clone())),
            None => Ok(()),
        }
    }

    /// Returns all (name, expansion) pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.definitions
            .iter()
            .map(|(name, expansion)| (name.as_str(), expansion.as_str()))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Expands macro invocations in `contents` in a single left-to-right pass.
///
/// Expansion text is copied to the output verbatim and never rescanned, so
/// a macro whose expansion contains another invocation leaves that
/// invocation literal. Unknown names and unterminated invocations are kept
/// as written. `title` feeds the built-in `title` macro, which the table
/// may override.
pub fn apply_macros(contents: &str, table: &MacroTable, delimiters: &Delimiters, title: &Title) -> String {
    let open = delimiters.macro_open.as_str();
    let close = delimiters.macro_close.as_str();
    if open.is_empty() {
        return contents.to_string();
    }

    let mut output = String::with_capacity(contents.len());
    let mut cursor = 0;
    let mut expanded = 0usize;

    while let Some(rel) = contents[cursor..].find(open) {
        let start = cursor + rel;
        let body_start = start + open.len();
        output.push_str(&contents[cursor..start]);

        let rest = &contents[body_start..];
        let Some(close_rel) = rest.find(close) else {
            // Unterminated: keep the remainder as written.
            cursor = start;
            break;
        };

        if let Some(nested) = rest[..close_rel].find(open) {
            // `{{a {{b}}`: the outer opener is literal, resume at the inner one.
            output.push_str(&contents[start..body_start + nested]);
            cursor = body_start + nested;
            continue;
        }

        let name = rest[..close_rel].trim();
        let end = body_start + close_rel + close.len();
        match lookup(name, table, title) {
            Some(expansion) => {
                output.push_str(expansion);
                expanded += 1;
            }
            None => {
                tracing::trace!("Unknown macro {:?} kept literal", name);
                output.push_str(&contents[start..end]);
            }
        }
        cursor = end;
    }
    output.push_str(&contents[cursor..]);

    tracing::trace!("Expanded {} macro invocation(s) in '{}'", expanded, title);
    output
}

fn lookup<'a>(name: &str, table: &'a MacroTable, title: &'a Title) -> Option<&'a str> {
    match table.get(name) {
        Some(expansion) => Some(expansion),
        None if name == TITLE_MACRO => Some(title.as_str()),
        None => None,
    }
}
