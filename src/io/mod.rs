//! File access for loading note workspaces.

mod file_cache;

pub use file_cache::{FileCache, RealFileCache, VirtualFS};
