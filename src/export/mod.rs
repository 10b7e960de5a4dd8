//! Rendering documents for other tools.

mod markdown;

pub use markdown::{block_to_markdown, to_markdown};
