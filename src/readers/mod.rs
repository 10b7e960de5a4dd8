//! Readers turning document files into documents.

mod frontmatter;

pub use frontmatter::{read_document, split_frontmatter, Frontmatter, FrontmatterHeader};
