//! Keeping backward links in step with forward links.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::model::{Document, DocumentId};

/// How one document's forward links changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDelta {
    /// Targets that gained a backward link.
    pub added: Vec<DocumentId>,
    /// Targets that lost a backward link.
    pub removed: Vec<DocumentId>,
}

impl LinkDelta {
    /// Returns true if no link changed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Moves `source`'s forward links to `new_links`, updating the backward
/// links of every target that entered or left the set.
///
/// Targets missing from `documents` are skipped: a removed document has no
/// backward set left to update, and a new link to one is dropped.
pub(crate) fn reconcile(
    documents: &mut IndexMap<DocumentId, Document>,
    source: DocumentId,
    mut new_links: BTreeSet<DocumentId>,
) -> LinkDelta {
    new_links.retain(|target| {
        let present = documents.contains_key(target);
        if !present {
            tracing::warn!("Dropping link from {} to missing document {}", source, target);
        }
        present
    });

    let Some(doc) = documents.get(&source) else {
        tracing::warn!("Cannot reconcile links of missing document {}", source);
        return LinkDelta::default();
    };
    let old_links = doc.forward_links();

    let delta = LinkDelta {
        removed: old_links.difference(&new_links).copied().collect(),
        added: new_links.difference(old_links).copied().collect(),
    };

    for target in &delta.removed {
        match documents.get_mut(target) {
            Some(doc) => {
                doc.remove_backward_link(source);
            }
            None => tracing::debug!("Link target {} already removed", target),
        }
    }

    for target in &delta.added {
        if let Some(doc) = documents.get_mut(target) {
            doc.add_backward_link(source);
        }
    }

    if let Some(doc) = documents.get_mut(&source) {
        doc.replace_forward_links(new_links);
    }

    if !delta.is_empty() {
        tracing::debug!(
            "Links of {}: +{} -{}",
            source,
            delta.added.len(),
            delta.removed.len()
        );
    }
    delta
}
