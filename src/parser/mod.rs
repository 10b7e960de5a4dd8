//! Turning raw contents into text blocks.
//!
//! A parse runs in two stages. Extended documents first have their macro
//! invocations expanded (see [`macros`]); the result is then segmented by
//! the mention [`scanner`]. Lite documents skip the first stage, so macro
//! syntax stays literal. Both stages are provided by the
//! [`ParseStrategy`] registered for the document's [`ParserVersion`].

mod macros;
mod scanner;
mod version;

use std::collections::BTreeSet;

pub use macros::{apply_macros, MacroTable, TITLE_MACRO};
pub use scanner::{scan, scan_mention, MentionScan};
pub use version::{BaselineStrategy, ParseStrategy, ParserVersion, StrategyRegistry};

use crate::config::{Config, Delimiters};
use crate::errors::Result;
use crate::model::{DocumentId, DocumentType, TextBlock, Title, TitleMap};
use crate::text_location::TextLocation;

/// Parse inputs that do not depend on the document set.
#[derive(Debug, Clone, Default)]
pub struct ParseSettings {
    /// Macro definitions for extended documents.
    pub macros: MacroTable,
    /// Mention and macro delimiters.
    pub delimiters: Delimiters,
    /// Strategy per parser version.
    pub strategies: StrategyRegistry,
}

impl ParseSettings {
    /// Builds settings from a configuration, rejecting invalid delimiters
    /// and macro names.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = Self {
            macros: config.macros.clone(),
            delimiters: config.delimiters.clone(),
            strategies: StrategyRegistry::builtin(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks delimiters and macro names.
    pub fn validate(&self) -> Result<()> {
        self.delimiters.validate()?;
        self.macros.validate()
    }
}

/// Everything a parse reads, lent by reference for the duration of the parse.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    /// Titles that mentions may resolve to.
    pub titles: &'a TitleMap,
    /// Macros, delimiters and strategies.
    pub settings: &'a ParseSettings,
}

impl<'a> ParseContext<'a> {
    pub fn new(titles: &'a TitleMap, settings: &'a ParseSettings) -> Self {
        Self { titles, settings }
    }

    pub fn delimiters(&self) -> &'a Delimiters {
        &self.settings.delimiters
    }

    /// Returns the strategy for a parser version.
    pub fn strategy(&self, version: ParserVersion) -> &'a dyn ParseStrategy {
        self.settings.strategies.get(version)
    }
}

/// A mention whose title did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedMention {
    /// The trimmed title as written.
    pub title: String,
    /// Where the mention starts in the scanned text. For extended
    /// documents this is the text after macro expansion.
    pub location: TextLocation,
}

/// The result of parsing one document's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContents {
    /// The block sequence, in order.
    pub blocks: Vec<TextBlock>,
    /// Documents mentioned at least once.
    pub mentions: BTreeSet<DocumentId>,
    /// Mentions that named no known document.
    pub unresolved: Vec<UnresolvedMention>,
}

/// Parses contents under lite rules: mentions only.
pub fn parse_lite(contents: &str, version: ParserVersion, ctx: &ParseContext<'_>) -> ParsedContents {
    ctx.strategy(version).scan(contents, ctx)
}

/// Parses contents under extended rules: macro expansion, then mentions.
pub fn parse_extended(
    contents: &str,
    title: &Title,
    version: ParserVersion,
    ctx: &ParseContext<'_>,
) -> ParsedContents {
    let strategy = ctx.strategy(version);
    let expanded = strategy.expand_macros(contents, title, ctx);
    strategy.scan(&expanded, ctx)
}

/// Parses contents according to the document type.
pub fn parse_contents(
    contents: &str,
    document_type: DocumentType,
    title: &Title,
    version: ParserVersion,
    ctx: &ParseContext<'_>,
) -> ParsedContents {
    match document_type {
        DocumentType::Lite => parse_lite(contents, version, ctx),
        DocumentType::Extended => parse_extended(contents, title, version, ctx),
    }
}
