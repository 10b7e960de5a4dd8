//! Shared test utilities.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::interface::Context;
use crate::io::VirtualFS;

/// Creates a context over an in-memory workspace of `(path, text)` files.
pub fn workspace(files: &[(&str, &str)]) -> Context {
    workspace_with_config(files, Config::default())
}

/// Like [`workspace`], with a custom configuration.
pub fn workspace_with_config(files: &[(&str, &str)], config: Config) -> Context {
    let mut vfs = VirtualFS::new();
    for (path, text) in files {
        vfs.add_file(*path, *text);
    }
    Context::with_file_cache(config, PathBuf::new(), Arc::new(vfs))
}
