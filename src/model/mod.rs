//! Core model types for smalltext.

mod document;
mod document_id;
mod document_type;
mod text_block;
mod text_style;
mod title;
mod title_map;

pub use document::Document;
pub use document_id::DocumentId;
pub use document_type::DocumentType;
pub use text_block::{ExtendedTextBlock, PlainText, TextBlock};
pub use text_style::{Slant, TextStyle, Weight};
pub use title::Title;
pub use title_map::{TitleEntry, TitleMap};
