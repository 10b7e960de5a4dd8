//! The document set and its link graph.
//!
//! A [`DocumentSet`] owns every document. Documents name each other through
//! [`DocumentId`](crate::model::DocumentId) handles, and the set keeps
//! forward and backward links mirrored across every mutation.

mod document_set;
mod reconcile;

pub use document_set::{DocumentSet, NewDocument};
pub use reconcile::LinkDelta;
