//! smalltext - hypertext note engine
//!
//! Notes are plain text documents that mention each other by title with
//! `[[Title]]`. Parsing turns a document's contents into a sequence of text
//! blocks, resolving each mention to the document it names. A
//! [`DocumentSet`] owns every document and keeps links bidirectional: when a
//! document mentions another, the target records a backward link.
//!
//! # Features
//!
//! - **Lite documents**: mentions only
//! - **Extended documents**: `{{name}}` macro expansion before mentions
//! - **Versioned parsing**: each document records the rule set it was written for
//! - **Workspaces**: load a directory of note files with YAML frontmatter
//! - **Export**: render a document as markdown
//!
//! # Example
//!
//! ```
//! use smalltext::{DocumentSet, DocumentType};
//!
//! let mut set = DocumentSet::new();
//! let tea = set.create_document("Tea", DocumentType::Lite).unwrap();
//! let diary = set
//!     .create_document_with_contents("Diary", DocumentType::Lite, "Drank [[Tea]]")
//!     .unwrap();
//!
//! assert!(set.get(diary).unwrap().forward_links().contains(&tea));
//! assert!(set.get(tea).unwrap().backward_links().contains(&diary));
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod export;
pub mod graph;
pub mod interface;
pub mod io;
pub mod model;
pub mod parser;
pub mod readers;
pub mod text_location;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use errors::{Result, SmalltextError};
pub use graph::{DocumentSet, LinkDelta, NewDocument};
pub use interface::{load_workspace, Context};
pub use model::{Document, DocumentId, DocumentType, TextBlock, TextStyle, Title};
pub use parser::{ParseContext, ParseSettings, ParserVersion};
