//! A single document: contents, parsed blocks and link sets.

use std::collections::BTreeSet;

use super::document_id::DocumentId;
use super::document_type::DocumentType;
use super::text_block::TextBlock;
use super::text_style::TextStyle;
use super::title::Title;
use crate::parser::{parse_contents, ParseContext, ParserVersion, UnresolvedMention};

/// A document in a [`DocumentSet`](crate::graph::DocumentSet).
///
/// Parsing methods return the set of documents the contents mention. They
/// never touch the link sets themselves: the document set feeds that
/// result through its reconciliation step, which is the only writer of
/// `forward_links` and `backward_links`.
#[derive(Debug, Clone)]
pub struct Document {
    id: DocumentId,
    title: Title,
    contents: String,
    blocks: Vec<TextBlock>,
    document_type: DocumentType,
    presentation: TextStyle,
    parser_version: ParserVersion,
    forward_links: BTreeSet<DocumentId>,
    backward_links: BTreeSet<DocumentId>,
    unresolved: Vec<UnresolvedMention>,
    stale: bool,
}

impl Document {
    /// Creates an empty document. Empty contents parse to no blocks, so a
    /// new document starts out fresh.
    pub fn new(id: DocumentId, title: Title, document_type: DocumentType) -> Self {
        Self {
            id,
            title,
            contents: String::new(),
            blocks: Vec::new(),
            document_type,
            presentation: TextStyle::default(),
            parser_version: ParserVersion::default(),
            forward_links: BTreeSet::new(),
            backward_links: BTreeSet::new(),
            unresolved: Vec::new(),
            stale: false,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// How this document is rendered where it is mentioned.
    pub fn presentation(&self) -> &TextStyle {
        &self.presentation
    }

    pub fn parser_version(&self) -> ParserVersion {
        self.parser_version
    }

    /// The raw, unparsed contents.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The blocks produced by the last parse.
    pub fn text_blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    /// Documents this one mentions.
    pub fn forward_links(&self) -> &BTreeSet<DocumentId> {
        &self.forward_links
    }

    /// Documents that mention this one.
    pub fn backward_links(&self) -> &BTreeSet<DocumentId> {
        &self.backward_links
    }

    /// Mentions from the last parse that named no known document.
    pub fn unresolved_mentions(&self) -> &[UnresolvedMention] {
        &self.unresolved
    }

    /// Returns true if the last parse left a mention of `title` unresolved.
    pub fn mentions_unresolved(&self, title: &str) -> bool {
        self.unresolved.iter().any(|m| m.title == title)
    }

    /// Returns true if the blocks no longer reflect the contents or type.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Replaces the raw contents without parsing them.
    pub fn set_contents(&mut self, contents: impl Into<String>) {
        let contents = contents.into();
        if contents != self.contents {
            self.contents = contents;
            self.stale = true;
        }
    }

    /// Changes the document type and returns the contents that represent
    /// the document under its new type.
    ///
    /// Going from extended to lite bakes the macros in: the returned text is
    /// the stored contents with every macro expanded, since lite documents
    /// would otherwise show the raw invocations. In every other case the
    /// stored contents are returned unchanged. The stored contents are never
    /// modified here; the caller decides whether to adopt the returned text.
    pub fn set_type(&mut self, new_type: DocumentType, ctx: &ParseContext<'_>) -> String {
        let proposed = match (self.document_type, new_type) {
            (DocumentType::Extended, DocumentType::Lite) => ctx
                .strategy(self.parser_version)
                .expand_macros(&self.contents, &self.title, ctx),
            _ => self.contents.clone(),
        };
        if new_type != self.document_type {
            tracing::debug!(
                "Document '{}' changed type {} -> {}",
                self.title,
                self.document_type,
                new_type
            );
            self.document_type = new_type;
            self.stale = true;
        }
        proposed
    }

    /// Replaces the contents and parses them, returning the mentioned documents.
    pub fn process_contents(
        &mut self,
        contents: impl Into<String>,
        ctx: &ParseContext<'_>,
    ) -> BTreeSet<DocumentId> {
        self.contents = contents.into();
        self.reprocess_contents(ctx)
    }

    /// Parses the stored contents again, returning the mentioned documents.
    pub fn reprocess_contents(&mut self, ctx: &ParseContext<'_>) -> BTreeSet<DocumentId> {
        let parsed = parse_contents(
            &self.contents,
            self.document_type,
            &self.title,
            self.parser_version,
            ctx,
        );
        tracing::debug!(
            "Parsed '{}': {} block(s), {} mention(s), {} unresolved",
            self.title,
            parsed.blocks.len(),
            parsed.mentions.len(),
            parsed.unresolved.len()
        );
        self.blocks = parsed.blocks;
        self.unresolved = parsed.unresolved;
        self.stale = false;
        parsed.mentions
    }

    /// Recomputes the mentioned documents from the current contents against
    /// a possibly changed title map.
    pub fn reset_forward_links(&mut self, ctx: &ParseContext<'_>) -> BTreeSet<DocumentId> {
        self.reprocess_contents(ctx)
    }

    pub(crate) fn set_title(&mut self, title: Title) {
        self.title = title;
        if self.document_type.allows_macros() {
            // the built-in title macro may now expand differently
            self.stale = true;
        }
    }

    pub(crate) fn set_presentation(&mut self, presentation: TextStyle) {
        self.presentation = presentation;
    }

    pub(crate) fn set_parser_version(&mut self, version: ParserVersion) {
        if version != self.parser_version {
            self.parser_version = version;
            self.stale = true;
        }
    }

    /// Records that `source` mentions this document. Returns false if it
    /// was already recorded.
    pub(crate) fn add_backward_link(&mut self, source: DocumentId) -> bool {
        self.backward_links.insert(source)
    }

    /// Forgets that `source` mentions this document. Returns false if it
    /// was not recorded.
    pub(crate) fn remove_backward_link(&mut self, source: DocumentId) -> bool {
        self.backward_links.remove(&source)
    }

    pub(crate) fn replace_forward_links(&mut self, links: BTreeSet<DocumentId>) -> BTreeSet<DocumentId> {
        std::mem::replace(&mut self.forward_links, links)
    }

    pub(crate) fn replace_backward_links(&mut self, links: BTreeSet<DocumentId>) -> BTreeSet<DocumentId> {
        std::mem::replace(&mut self.backward_links, links)
    }
}
