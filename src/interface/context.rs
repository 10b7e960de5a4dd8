//! Execution context for workspace operations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::errors::Result;
use crate::io::{FileCache, RealFileCache};

/// Configuration plus file access for one workspace.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration.
    pub config: Config,
    /// File cache for reading document files.
    pub file_cache: Arc<dyn FileCache>,
    /// Base directory for relative paths.
    pub base_dir: PathBuf,
}

impl Context {
    /// Creates a context reading from the real file system.
    pub fn new(config: Config, base_dir: PathBuf) -> Self {
        let file_cache = Arc::new(RealFileCache::new(base_dir.clone()));
        Self::with_file_cache(config, base_dir, file_cache)
    }

    /// Creates a context over any file cache, e.g. a [`VirtualFS`](crate::io::VirtualFS).
    pub fn with_file_cache(config: Config, base_dir: PathBuf, file_cache: Arc<dyn FileCache>) -> Self {
        Self {
            config,
            file_cache,
            base_dir,
        }
    }

    /// Creates a context with default configuration.
    pub fn default_for_dir(base_dir: PathBuf) -> Self {
        Self::new(Config::default(), base_dir)
    }

    /// Creates a context from the current directory, reading any config
    /// file found there or above.
    pub fn from_current_dir() -> Result<Self> {
        let base_dir = std::env::current_dir()?;
        let config = crate::config::read_config(&base_dir)?;
        Ok(Self::new(config, base_dir))
    }

    /// Returns document file paths matching the configured patterns.
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for pattern in &self.config.source_patterns {
            files.extend(self.file_cache.glob(pattern)?);
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Resolves a path relative to the base directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
