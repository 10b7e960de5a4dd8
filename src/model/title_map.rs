//! Title lookup used to resolve mentions.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::document_id::DocumentId;
use super::text_style::TextStyle;
use super::title::Title;
use crate::errors::{Result, SmalltextError};

/// What a title resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleEntry {
    /// The document carrying the title.
    pub id: DocumentId,
    /// The document's presentation setting, copied into mention blocks.
    pub presentation: TextStyle,
}

/// A map of titles to documents with a reverse index.
///
/// - Primary index: `IndexMap<Title, TitleEntry>` (preserves insertion order)
/// - Reverse index: `HashMap<DocumentId, Title>` (rename and removal by id)
///
/// The map is owned by the [`DocumentSet`](crate::graph::DocumentSet) and lent
/// to parses through a [`ParseContext`](crate::parser::ParseContext).
#[derive(Debug, Clone, Default)]
pub struct TitleMap {
    entries: IndexMap<Title, TitleEntry>,
    titles: HashMap<DocumentId, Title>,
}

impl TitleMap {
    /// Creates a new empty title map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a title for a document.
    ///
    /// Fails if the title is already taken or the document already has one.
    pub fn insert(&mut self, title: Title, id: DocumentId, presentation: TextStyle) -> Result<()> {
        if self.entries.contains_key(&title) {
            return Err(SmalltextError::DuplicateTitle(title));
        }
        if let Some(existing) = self.titles.get(&id) {
            return Err(SmalltextError::Inconsistent(format!(
                "document {} is already registered as '{}'",
                id, existing
            )));
        }
        self.titles.insert(id, title.clone());
        self.entries.insert(title, TitleEntry { id, presentation });
        Ok(())
    }

    /// Resolves a title to its entry.
    pub fn resolve(&self, title: &str) -> Option<&TitleEntry> {
        self.entries.get(title)
    }

    /// Resolves a title to a document id.
    pub fn id_of(&self, title: &str) -> Option<DocumentId> {
        self.resolve(title).map(|entry| entry.id)
    }

    /// Returns the title registered for a document.
    pub fn title_of(&self, id: DocumentId) -> Option<&Title> {
        self.titles.get(&id)
    }

    /// Removes the title of a document, returning it.
    pub fn remove(&mut self, id: DocumentId) -> Option<Title> {
        let title = self.titles.remove(&id)?;
        self.entries.shift_remove(&title);
        Some(title)
    }

    /// Moves a document to a new title, returning the old one.
    pub fn rename(&mut self, id: DocumentId, new_title: Title) -> Result<Title> {
        if let Some(owner) = self.id_of(new_title.as_str()) {
            if owner == id {
                return Ok(new_title);
            }
            return Err(SmalltextError::DuplicateTitle(new_title));
        }
        let old = self
            .titles
            .get(&id)
            .cloned()
            .ok_or(SmalltextError::DocumentNotFound(id))?;
        let entry = self
            .entries
            .shift_remove(&old)
            .ok_or(SmalltextError::DocumentNotFound(id))?;
        self.titles.insert(id, new_title.clone());
        self.entries.insert(new_title, entry);
        Ok(old)
    }

    /// Updates the presentation setting recorded for a document.
    pub fn set_presentation(&mut self, id: DocumentId, presentation: TextStyle) -> Result<()> {
        let title = self
            .titles
            .get(&id)
            .ok_or(SmalltextError::DocumentNotFound(id))?;
        if let Some(entry) = self.entries.get_mut(title) {
            entry.presentation = presentation;
        }
        Ok(())
    }

    /// Checks if a title is registered.
    pub fn contains(&self, title: &str) -> bool {
        self.entries.contains_key(title)
    }

    /// Returns all (Title, TitleEntry) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Title, &TitleEntry)> {
        self.entries.iter()
    }

    /// Returns the number of registered titles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no titles are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
