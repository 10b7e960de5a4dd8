//! Versioned parsing rules.
//!
//! Every document records the [`ParserVersion`] it was written under. The
//! [`StrategyRegistry`] maps each version to a [`ParseStrategy`], so new
//! syntax can be introduced as a new version without changing how older
//! documents parse.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::SmalltextError;
use crate::model::Title;

use super::{macros, scanner, ParseContext, ParsedContents};

/// Parsing rule sets, oldest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ParserVersion {
    /// Baseline rules: `[[Title]]` mentions and `{{name}}` macros.
    #[default]
    V0,
}

impl ParserVersion {
    /// Every known version, in order.
    pub const ALL: &'static [ParserVersion] = &[ParserVersion::V0];

    /// Returns the newest version.
    pub fn latest() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }

    /// Returns the version number as written in files.
    pub fn number(self) -> u32 {
        match self {
            ParserVersion::V0 => 0,
        }
    }

    fn slot(self) -> usize {
        self.number() as usize
    }
}

impl TryFrom<u32> for ParserVersion {
    type Error = SmalltextError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.number() == number)
            .ok_or(SmalltextError::UnsupportedParserVersion(number))
    }
}

impl From<ParserVersion> for u32 {
    fn from(version: ParserVersion) -> Self {
        version.number()
    }
}

impl fmt::Display for ParserVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

/// One version's parsing rules.
pub trait ParseStrategy: Send + Sync {
    /// The version this strategy implements.
    fn version(&self) -> ParserVersion;

    /// Rewrites macro invocations; only called for extended documents.
    fn expand_macros(&self, contents: &str, title: &Title, ctx: &ParseContext<'_>) -> String;

    /// Segments contents into blocks and collects mentions.
    fn scan(&self, contents: &str, ctx: &ParseContext<'_>) -> ParsedContents;
}

/// Version 0 rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineStrategy;

impl ParseStrategy for BaselineStrategy {
    fn version(&self) -> ParserVersion {
        ParserVersion::V0
    }

    fn expand_macros(&self, contents: &str, title: &Title, ctx: &ParseContext<'_>) -> String {
        macros::apply_macros(contents, &ctx.settings.macros, ctx.delimiters(), title)
    }

    fn scan(&self, contents: &str, ctx: &ParseContext<'_>) -> ParsedContents {
        scanner::scan(contents, ctx)
    }
}

fn builtin_strategy(version: ParserVersion) -> Arc<dyn ParseStrategy> {
    match version {
        ParserVersion::V0 => Arc::new(BaselineStrategy),
    }
}

/// Table of strategies, one slot per [`ParserVersion`].
///
/// Always complete: it starts from the built-in strategies and
/// [`register`](Self::register) only replaces slots.
#[derive(Clone)]
pub struct StrategyRegistry {
    strategies: Vec<Arc<dyn ParseStrategy>>,
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let versions: Vec<ParserVersion> = self.strategies.iter().map(|s| s.version()).collect();
        f.debug_struct("StrategyRegistry")
            .field("versions", &versions)
            .finish()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StrategyRegistry {
    /// Creates a registry holding the built-in strategy for every version.
    pub fn builtin() -> Self {
        Self {
            strategies: ParserVersion::ALL.iter().map(|v| builtin_strategy(*v)).collect(),
        }
    }

    /// Replaces the strategy for `strategy.version()`.
    pub fn register<S: ParseStrategy + 'static>(&mut self, strategy: S) {
        let slot = strategy.version().slot();
        tracing::debug!("Registering parse strategy for {}", strategy.version());
        self.strategies[slot] = Arc::new(strategy);
    }

    /// Returns the strategy for a version.
    pub fn get(&self, version: ParserVersion) -> &dyn ParseStrategy {
        self.strategies[version.slot()].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TextBlock, TitleMap};
    use crate::parser::ParseSettings;

    #[test]
    fn test_version_numbers() {
        assert_eq!(ParserVersion::V0.number(), 0);
        assert_eq!(ParserVersion::try_from(0).unwrap(), ParserVersion::V0);
        assert!(matches!(
            ParserVersion::try_from(7),
            Err(SmalltextError::UnsupportedParserVersion(7))
        ));
        assert_eq!(ParserVersion::latest(), ParserVersion::V0);
    }

    #[test]
    fn test_serde() {
        let version: ParserVersion = serde_yaml::from_str("0").unwrap();
        assert_eq!(version, ParserVersion::V0);
        assert!(serde_yaml::from_str::<ParserVersion>("3").is_err());
        assert_eq!(serde_json::to_string(&ParserVersion::V0).unwrap(), "0");
    }

    #[test]
    fn test_builtin_registry_covers_all_versions() {
        let registry = StrategyRegistry::builtin();
        for version in ParserVersion::ALL {
            assert_eq!(registry.get(*version).version(), *version);
        }
    }

    struct Shouting;

    impl ParseStrategy for Shouting {
        fn version(&self) -> ParserVersion {
            ParserVersion::V0
        }

        fn expand_macros(&self, contents: &str, _title: &Title, _ctx: &ParseContext<'_>) -> String {
            contents.to_string()
        }

        fn scan(&self, contents: &str, _ctx: &ParseContext<'_>) -> ParsedContents {
            ParsedContents {
                blocks: vec![TextBlock::plain(contents.to_uppercase())],
                ..ParsedContents::default()
            }
        }
    }

    #[test]
    fn test_register_replaces_slot() {
        let mut settings = ParseSettings::default();
        settings.strategies.register(Shouting);

        let titles = TitleMap::new();
        let ctx = ParseContext::new(&titles, &settings);
        let parsed = ctx.strategy(ParserVersion::V0).scan("quiet", &ctx);
        assert_eq!(parsed.blocks, vec![TextBlock::plain("QUIET")]);
    }
}
