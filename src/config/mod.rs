//! Configuration loading and management.

mod config_data;
mod delimiters;

use std::fs;
use std::path::{Path, PathBuf};

pub use config_data::Config;
pub use delimiters::Delimiters;

use crate::errors::Result;

/// Standard configuration file names to search for.
const CONFIG_FILES: &[&str] = &["smalltext.toml", ".smalltext.toml"];

/// Finds the configuration file in the given directory or its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Reads and validates configuration from a TOML file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Reads configuration, searching from the given directory.
///
/// If no config file is found, returns the default configuration.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => read_config_file(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentType;
    use crate::parser::ParserVersion;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("smalltext.toml");
        fs::write(&config_path, "version = \"1.0\"").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_config_file_parent() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".smalltext.toml");
        fs::write(&config_path, "version = \"1.0\"").unwrap();

        let subdir = dir.path().join("journal");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("smalltext.toml");

        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
source_patterns = ["notes/**/*.stxt"]
default_type = "extended"
parser_version = 0

[delimiters]
mention_open = "@["
mention_close = "]"

[macros]
sig = "-- written in the garden"
"#
        )
        .unwrap();

        let config = read_config_file(&config_path).unwrap();
        assert_eq!(config.source_patterns, vec!["notes/**/*.stxt"]);
        assert_eq!(config.default_type, DocumentType::Extended);
        assert_eq!(config.parser_version, ParserVersion::V0);
        assert_eq!(config.delimiters.mention_open, "@[");
        assert_eq!(config.delimiters.macro_open, "{{");
        assert_eq!(config.macros.get("sig"), Some("-- written in the garden"));
    }

    #[test]
    fn test_read_config_rejects_overlapping_delimiters() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("smalltext.toml");
        fs::write(
            &config_path,
            "[delimiters]\nmention_open = \"{{\"\n",
        )
        .unwrap();

        assert!(read_config_file(&config_path).is_err());
    }

    #[test]
    fn test_read_config_rejects_unknown_version() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("smalltext.toml");
        fs::write(&config_path, "parser_version = 42\n").unwrap();

        assert!(read_config_file(&config_path).is_err());
    }
}
