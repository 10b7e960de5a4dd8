//! Export command: render a document as markdown.

use std::io::Write;
use std::path::PathBuf;

use crate::errors::Result;
use crate::export::to_markdown;
use crate::interface::{load_workspace, lookup, Context};

/// Options for the export command.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Title of the document to export.
    pub title: String,
    /// Write to this file instead of the output stream.
    pub output: Option<PathBuf>,
}

/// Renders one document as markdown.
pub fn export(ctx: &Context, options: &ExportOptions, out: &mut impl Write) -> Result<()> {
    let set = load_workspace(ctx)?;
    let doc = lookup(&set, &options.title)?;
    let markdown = to_markdown(doc, &set);

    match &options.output {
        Some(path) => {
            let path = ctx.resolve_path(path);
            std::fs::write(&path, markdown)?;
            tracing::info!("Exported '{}' to {}", doc.title(), path.display());
        }
        None => out.write_all(markdown.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::workspace;
    use tempfile::tempdir;

    #[test]
    fn test_export_to_writer() {
        let ctx = workspace(&[("Tea.stxt", "with [[Milk]]"), ("Milk.stxt", "")]);
        let options = ExportOptions {
            title: "Tea".to_string(),
            output: None,
        };
        let mut out = Vec::new();
        export(&ctx, &options, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "with [Milk](<Milk>)");
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("Tea.stxt"), "Oolong").unwrap();
        let ctx = Context::new(Config::default(), dir.path().to_path_buf());
        let options = ExportOptions {
            title: "Tea".to_string(),
            output: Some(PathBuf::from("tea.md")),
        };

        let mut out = Vec::new();
        export(&ctx, &options, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("tea.md")).unwrap(),
            "Oolong"
        );
    }
}
