//! Stable handles for documents held by a document set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-owning handle to a document in a [`DocumentSet`](crate::graph::DocumentSet).
///
/// Ids are allocated once and never reused, so a dangling id left behind by
/// a removed document can never alias a newer one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DocumentId(usize);

impl DocumentId {
    /// Creates an id from its raw index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next() {
        let id = DocumentId::new(4);
        assert_eq!(id.next().index(), 5);
    }

    #[test]
    fn test_ordering() {
        assert!(DocumentId::new(1) < DocumentId::new(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(DocumentId::new(7).to_string(), "#7");
    }
}
