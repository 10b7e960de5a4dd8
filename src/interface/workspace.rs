//! Loading every document file of a workspace into a document set.

use crate::errors::{Result, SmalltextError};
use crate::graph::DocumentSet;
use crate::model::{Document, Title};
use crate::readers::read_document;

use super::Context;

/// Loads all source files into a fresh [`DocumentSet`].
///
/// Every file is added before anything is parsed, so mentions resolve no
/// matter which file declares the target. Two files with the same title
/// are a load error.
pub fn load_workspace(ctx: &Context) -> Result<DocumentSet> {
    let mut set = DocumentSet::from_config(&ctx.config)?;

    for path in ctx.source_files()? {
        let text = ctx.file_cache.read(&path)?;
        let new = read_document(&path, &text, &ctx.config)?;
        if let Err(e) = set.create_unprocessed(new) {
            tracing::warn!("Cannot load {}: {}", path.display(), e);
            return Err(e);
        }
    }

    set.reset_all_links();
    tracing::info!(
        "Loaded {} document(s), {} unresolved mention(s)",
        set.len(),
        set.unresolved_mentions().len()
    );
    Ok(set)
}

/// Finds a document by title, failing with [`SmalltextError::TitleNotFound`].
pub fn lookup<'a>(set: &'a DocumentSet, title: &str) -> Result<&'a Document> {
    set.by_title(title)
        .ok_or_else(|| SmalltextError::TitleNotFound(Title::new(title)))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::config::Config;
    use crate::model::DocumentType;
    use crate::parser::MacroTable;
    use crate::test_utils::{workspace, workspace_with_config};

    #[test]
    fn test_load_resolves_across_files() {
        // alice sorts before bob, so her mention is written before Bob exists
        let ctx = workspace(&[
            ("alice.stxt", "Met [[Bob]]"),
            ("bob.stxt", "---\ntitle: Bob\n---\nHi [[alice]]"),
        ]);
        let set = load_workspace(&ctx).unwrap();

        let alice = lookup(&set, "alice").unwrap();
        let bob = lookup(&set, "Bob").unwrap();
        assert_eq!(alice.forward_links(), &BTreeSet::from([bob.id()]));
        assert_eq!(bob.forward_links(), &BTreeSet::from([alice.id()]));
        assert!(set.stale_documents().is_empty());
        set.check_consistency().unwrap();
    }

    #[test]
    fn test_load_applies_config() {
        let config = Config {
            default_type: DocumentType::Extended,
            macros: MacroTable::new().with("herb", "[[Basil]]").unwrap(),
            ..Config::default()
        };
        let ctx = workspace_with_config(
            &[("Basil.stxt", "Green"), ("Pesto.stxt", "Needs {{herb}}")],
            config,
        );
        let set = load_workspace(&ctx).unwrap();

        let pesto = lookup(&set, "Pesto").unwrap();
        assert_eq!(pesto.document_type(), DocumentType::Extended);
        assert_eq!(pesto.forward_links().len(), 1);
    }

    #[test]
    fn test_load_duplicate_titles_fails() {
        let ctx = workspace(&[("a/Tea.stxt", ""), ("b/Tea.stxt", "")]);
        let err = load_workspace(&ctx).unwrap_err();
        assert!(matches!(err, SmalltextError::DuplicateTitle(_)));
    }

    #[test]
    fn test_lookup_missing_title() {
        let set = DocumentSet::new();
        assert!(matches!(
            lookup(&set, "Nowhere"),
            Err(SmalltextError::TitleNotFound(_))
        ));
    }
}
