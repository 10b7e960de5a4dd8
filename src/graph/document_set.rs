//! The document arena and link-graph maintainer.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::reconcile::{reconcile, LinkDelta};
use crate::config::Config;
use crate::errors::{Result, SmalltextError};
use crate::model::{Document, DocumentId, DocumentType, TextStyle, Title, TitleMap};
use crate::parser::{ParseContext, ParseSettings, ParserVersion, UnresolvedMention};

/// Everything needed to add a document to a [`DocumentSet`].
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: Title,
    pub document_type: DocumentType,
    pub contents: String,
    pub presentation: TextStyle,
    pub parser_version: ParserVersion,
}

impl NewDocument {
    /// Describes an empty document with default presentation, written
    /// under the newest parser version.
    pub fn new(title: impl Into<Title>, document_type: DocumentType) -> Self {
        Self {
            title: title.into(),
            document_type,
            contents: String::new(),
            presentation: TextStyle::default(),
            parser_version: ParserVersion::latest(),
        }
    }

    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = contents.into();
        self
    }

    pub fn with_presentation(mut self, presentation: TextStyle) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn with_parser_version(mut self, version: ParserVersion) -> Self {
        self.parser_version = version;
        self
    }
}

/// Owns every document and keeps their links mutually consistent.
///
/// For any documents A and B, B is in A's forward links exactly when A is
/// in B's backward links. Every mutating method restores this before it
/// returns: it re-parses whichever documents the change can affect and
/// reconciles their links.
///
/// Documents refer to each other by [`DocumentId`]; the set is the only
/// owner of document storage.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    documents: IndexMap<DocumentId, Document>,
    titles: TitleMap,
    settings: ParseSettings,
    next_id: DocumentId,
}

impl DocumentSet {
    /// Creates an empty set with default delimiters and no macros.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with the given parse settings.
    ///
    /// Fails with [`SmalltextError::InvalidDelimiters`] or
    /// [`SmalltextError::InvalidMacroName`] if the settings do not validate.
    pub fn with_settings(settings: ParseSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Self::default()
        })
    }

    /// Creates an empty set configured from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_settings(ParseSettings::from_config(config)?)
    }

    pub fn settings(&self) -> &ParseSettings {
        &self.settings
    }

    pub fn titles(&self) -> &TitleMap {
        &self.titles
    }

    /// A parse context over the current titles, for parsing outside the set.
    pub fn context(&self) -> ParseContext<'_> {
        ParseContext::new(&self.titles, &self.settings)
    }


    /// Adds a document and parses its contents.
    ///
    /// Documents holding an unresolved mention of the new title are
    /// re-parsed so the mention resolves.
    pub fn create(&mut self, new: NewDocument) -> Result<DocumentId> {
        let title = new.title.clone();
        let id = self.create_unprocessed(new)?;

        let mut affected = self.waiting_on(&title);
        affected.push(id);
        self.refresh(&affected);
        Ok(id)
    }

    /// Adds a document without parsing anything.
    ///
    /// The new document is left stale and no links change. Bulk loaders
    /// add every document this way and then call
    /// [`reset_all_links`](Self::reset_all_links) once.
    pub fn create_unprocessed(&mut self, new: NewDocument) -> Result<DocumentId> {
        if new.title.is_empty() {
            return Err(SmalltextError::EmptyTitle);
        }

        let id = self.next_id;
        self.titles
            .insert(new.title.clone(), id, new.presentation.clone())?;
        self.next_id = id.next();

        let mut doc = Document::new(id, new.title.clone(), new.document_type);
        doc.set_presentation(new.presentation);
        doc.set_parser_version(new.parser_version);
        doc.set_contents(new.contents);
        self.documents.insert(id, doc);
        tracing::debug!("Created document '{}' as {}", new.title, id);
        Ok(id)
    }

    /// Adds an empty document.
    pub fn create_document(
        &mut self,
        title: impl Into<Title>,
        document_type: DocumentType,
    ) -> Result<DocumentId> {
        self.create(NewDocument::new(title, document_type))
    }

    /// Adds a document seeded with contents.
    pub fn create_document_with_contents(
        &mut self,
        title: impl Into<Title>,
        document_type: DocumentType,
        contents: impl Into<String>,
    ) -> Result<DocumentId> {
        self.create(NewDocument::new(title, document_type).with_contents(contents))
    }

    /// Removes a document and returns it, detached from the graph.
    ///
    /// Every document mentioning it is re-parsed first; with the title gone
    /// those mentions fall back to literal text and the links are dropped
    /// through the normal reconciliation path.
    pub fn remove_document(&mut self, id: DocumentId) -> Result<Document> {
        let referrers: Vec<DocumentId> = self
            .get_required(id)?
            .backward_links()
            .iter()
            .copied()
            .filter(|source| *source != id)
            .collect();

        self.titles.remove(id);
        self.refresh(&referrers);
        reconcile(&mut self.documents, id, BTreeSet::new());

        let doc = self
            .documents
            .shift_remove(&id)
            .ok_or(SmalltextError::DocumentNotFound(id))?;
        tracing::debug!(
            "Removed document '{}' ({} referrer(s) re-parsed)",
            doc.title(),
            referrers.len()
        );
        Ok(doc)
    }


    /// Gives a document a new title.
    ///
    /// Mentions of the old title stop resolving and pending mentions of the
    /// new title start to; both groups of documents are re-parsed.
    pub fn rename_document(&mut self, id: DocumentId, title: impl Into<Title>) -> Result<()> {
        let title = title.into();
        if title.is_empty() {
            return Err(SmalltextError::EmptyTitle);
        }
        if self.get_required(id)?.title() == &title {
            return Ok(());
        }

        let old = self.titles.rename(id, title.clone())?;
        let doc = self.get_required_mut(id)?;
        doc.set_title(title.clone());

        let mut affected: Vec<DocumentId> = doc.backward_links().iter().copied().collect();
        if doc.is_stale() {
            affected.push(id);
        }
        affected.extend(self.waiting_on(&title));
        affected.sort();
        affected.dedup();

        tracing::debug!("Renamed '{}' to '{}'", old, title);
        self.refresh(&affected);
        Ok(())
    }

    /// Stores new contents without parsing them; the document turns stale.
    pub fn set_contents(&mut self, id: DocumentId, contents: impl Into<String>) -> Result<()> {
        self.get_required_mut(id)?.set_contents(contents);
        Ok(())
    }

    /// Stores and parses new contents, then reconciles links.
    pub fn process_contents(
        &mut self,
        id: DocumentId,
        contents: impl Into<String>,
    ) -> Result<LinkDelta> {
        let ctx = ParseContext::new(&self.titles, &self.settings);
        let doc = self
            .documents
            .get_mut(&id)
            .ok_or(SmalltextError::DocumentNotFound(id))?;
        let mentions = doc.process_contents(contents, &ctx);
        Ok(reconcile(&mut self.documents, id, mentions))
    }

    /// Parses the stored contents again, then reconciles links.
    pub fn reprocess_contents(&mut self, id: DocumentId) -> Result<LinkDelta> {
        self.relink(id).ok_or(SmalltextError::DocumentNotFound(id))
    }

    /// Changes a document's type without parsing and returns the contents
    /// that represent it under the new type. Links are unchanged until the
    /// next parse.
    pub fn set_type(&mut self, id: DocumentId, document_type: DocumentType) -> Result<String> {
        let ctx = ParseContext::new(&self.titles, &self.settings);
        let doc = self
            .documents
            .get_mut(&id)
            .ok_or(SmalltextError::DocumentNotFound(id))?;
        Ok(doc.set_type(document_type, &ctx))
    }

    /// Changes a document's type, adopts the contents proposed for the new
    /// type and parses them.
    pub fn change_type(&mut self, id: DocumentId, document_type: DocumentType) -> Result<LinkDelta> {
        let contents = self.set_type(id, document_type)?;
        self.process_contents(id, contents)
    }

    /// Changes how a document is rendered where it is mentioned.
    ///
    /// Mention blocks carry a copy of the style, so every referrer is
    /// re-parsed.
    pub fn set_presentation(&mut self, id: DocumentId, presentation: TextStyle) -> Result<()> {
        self.titles.set_presentation(id, presentation.clone())?;
        let doc = self.get_required_mut(id)?;
        doc.set_presentation(presentation);

        let referrers: Vec<DocumentId> = doc.backward_links().iter().copied().collect();
        self.refresh(&referrers);
        Ok(())
    }

    /// Moves a document to other parsing rules and re-parses it.
    pub fn set_parser_version(&mut self, id: DocumentId, version: ParserVersion) -> Result<LinkDelta> {
        self.get_required_mut(id)?.set_parser_version(version);
        self.reprocess_contents(id)
    }


    /// Recomputes one document's forward links against the current titles.
    pub fn reset_forward_links(&mut self, id: DocumentId) -> Result<LinkDelta> {
        self.reprocess_contents(id)
    }

    /// Recomputes a document's forward links and rebuilds its backward
    /// links from every other document's forward links.
    pub fn reset_links(&mut self, id: DocumentId) -> Result<LinkDelta> {
        let delta = self.reset_forward_links(id)?;
        let sources: BTreeSet<DocumentId> = self
            .documents
            .values()
            .filter(|doc| doc.forward_links().contains(&id))
            .map(Document::id)
            .collect();
        self.get_required_mut(id)?.replace_backward_links(sources);
        Ok(delta)
    }

    /// Recomputes the forward links of every document.
    pub fn reset_all_links(&mut self) {
        let ids: Vec<DocumentId> = self.documents.keys().copied().collect();
        tracing::debug!("Resetting links of {} document(s)", ids.len());
        self.refresh(&ids);
    }

    /// Verifies that forward and backward links mirror each other and that
    /// titles and documents agree.
    pub fn check_consistency(&self) -> Result<()> {
        for doc in self.documents.values() {
            let id = doc.id();

            for target in doc.forward_links() {
                let Some(target_doc) = self.documents.get(target) else {
                    return Err(SmalltextError::Inconsistent(format!(
                        "'{}' links to missing document {}",
                        doc.title(),
                        target
                    )));
                };
                if !target_doc.backward_links().contains(&id) {
                    return Err(SmalltextError::Inconsistent(format!(
                        "'{}' links to '{}' without a backward link",
                        doc.title(),
                        target_doc.title()
                    )));
                }
            }

            for source in doc.backward_links() {
                let Some(source_doc) = self.documents.get(source) else {
                    return Err(SmalltextError::Inconsistent(format!(
                        "'{}' is linked from missing document {}",
                        doc.title(),
                        source
                    )));
                };
                if !source_doc.forward_links().contains(&id) {
                    return Err(SmalltextError::Inconsistent(format!(
                        "'{}' has a backward link from '{}' which does not mention it",
                        doc.title(),
                        source_doc.title()
                    )));
                }
            }

            if self.titles.id_of(doc.title().as_str()) != Some(id)
                || self.titles.title_of(id) != Some(doc.title())
            {
                return Err(SmalltextError::Inconsistent(format!(
                    "title '{}' does not resolve to {}",
                    doc.title(),
                    id
                )));
            }
        }

        if self.titles.len() != self.documents.len() {
            return Err(SmalltextError::Inconsistent(format!(
                "{} title(s) for {} document(s)",
                self.titles.len(),
                self.documents.len()
            )));
        }
        Ok(())
    }


    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    pub fn by_title(&self, title: &str) -> Option<&Document> {
        self.id_of(title).and_then(|id| self.get(id))
    }

    pub fn id_of(&self, title: &str) -> Option<DocumentId> {
        self.titles.id_of(title.trim())
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Returns all documents in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.documents.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents whose blocks no longer reflect their contents or type.
    pub fn stale_documents(&self) -> Vec<DocumentId> {
        self.documents
            .values()
            .filter(|doc| doc.is_stale())
            .map(Document::id)
            .collect()
    }

    /// Every unresolved mention across the set, by document.
    pub fn unresolved_mentions(&self) -> Vec<(DocumentId, &UnresolvedMention)> {
        self.documents
            .values()
            .flat_map(|doc| doc.unresolved_mentions().iter().map(move |m| (doc.id(), m)))
            .collect()
    }


    #[cfg(test)]
    pub(crate) fn document_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.get_mut(&id)
    }

    fn get_required(&self, id: DocumentId) -> Result<&Document> {
        self.documents
            .get(&id)
            .ok_or(SmalltextError::DocumentNotFound(id))
    }

    fn get_required_mut(&mut self, id: DocumentId) -> Result<&mut Document> {
        self.documents
            .get_mut(&id)
            .ok_or(SmalltextError::DocumentNotFound(id))
    }

    /// Documents with an unresolved mention of `title`.
    fn waiting_on(&self, title: &Title) -> Vec<DocumentId> {
        self.documents
            .values()
            .filter(|doc| doc.mentions_unresolved(title.as_str()))
            .map(Document::id)
            .collect()
    }

    /// Re-parses one document and reconciles its links.
    fn relink(&mut self, id: DocumentId) -> Option<LinkDelta> {
        let ctx = ParseContext::new(&self.titles, &self.settings);
        let doc = self.documents.get_mut(&id)?;
        let mentions = doc.reprocess_contents(&ctx);
        Some(reconcile(&mut self.documents, id, mentions))
    }

    fn refresh(&mut self, ids: &[DocumentId]) {
        for id in ids {
            if self.relink(*id).is_none() {
                tracing::warn!("Skipping re-parse of missing document {}", id);
            }
        }
    }
}
