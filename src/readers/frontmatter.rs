//! YAML frontmatter on document files.
//!
//! A document file may start with a header delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Gardening
//! type: extended
//! version: 0
//! presentation: { weight: bold, colour: "#2a7" }
//! ---
//! Planting [[Tomatoes]] in {{season}}.
//! ```
//!
//! Every key is optional. Without a title the file stem is used.

use std::path::Path;

use serde::Deserialize;

use crate::config::Config;
use crate::errors::{Result, SmalltextError};
use crate::graph::NewDocument;
use crate::model::{DocumentType, TextStyle, Title};
use crate::parser::ParserVersion;
use crate::text_location::TextLocation;

/// The raw header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterHeader<'a> {
    /// The YAML content, without delimiters.
    pub content: &'a str,
    /// Number of lines consumed, delimiters included.
    pub lines_consumed: usize,
}

/// Document metadata declared in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Frontmatter {
    pub title: Option<Title>,
    #[serde(rename = "type")]
    pub document_type: Option<DocumentType>,
    /// Parser version the body was written for.
    pub version: Option<ParserVersion>,
    pub presentation: Option<TextStyle>,
}

/// Splits a file into its frontmatter header and the remaining body.
///
/// The first line must be `---`. Without a closing `---` line the whole
/// input is treated as body.
pub fn split_frontmatter(input: &str) -> (Option<FrontmatterHeader<'_>>, &str) {
    let mut lines = input.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, input);
    };
    if first.trim() != "---" {
        return (None, input);
    }

    let content_start = first.len();
    let mut pos = content_start;
    let mut lines_consumed = 1;
    for line in lines {
        lines_consumed += 1;
        if line.trim() == "---" {
            let header = FrontmatterHeader {
                content: &input[content_start..pos],
                lines_consumed,
            };
            return (Some(header), &input[pos + line.len()..]);
        }
        pos += line.len();
    }

    (None, input)
}

impl Frontmatter {
    /// Parses header YAML. Error locations are relative to the file.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| {
            // header content starts on the second line of the file
            let location = match e.location() {
                Some(loc) => TextLocation::new(None, loc.line(), loc.column()).offset_lines(1),
                None => TextLocation::line_only(2),
            };
            SmalltextError::Parse {
                location: location.with_filename(path.to_path_buf()),
                message: e.to_string(),
            }
        })
    }
}

/// Reads a document file into a [`NewDocument`], filling undeclared
/// settings from `config`.
pub fn read_document(path: &Path, text: &str, config: &Config) -> Result<NewDocument> {
    let (header, body) = split_frontmatter(text);
    let meta = match header {
        Some(header) => Frontmatter::parse(header.content, path)?,
        None => Frontmatter::default(),
    };

    let title = match meta.title {
        Some(title) => title,
        None => path
            .file_stem()
            .map(|stem| Title::new(stem.to_string_lossy()))
            .unwrap_or_else(|| Title::new("")),
    };
    if title.is_empty() {
        return Err(SmalltextError::Parse {
            location: TextLocation::line_only(1).with_filename(path.to_path_buf()),
            message: "document has no title".to_string(),
        });
    }

    Ok(
        NewDocument::new(title, meta.document_type.unwrap_or(config.default_type))
            .with_contents(body)
            .with_presentation(meta.presentation.unwrap_or_default())
            .with_parser_version(meta.version.unwrap_or(config.parser_version)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Weight;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_frontmatter() {
        let input = "---\ntitle: Tea\n---\nGreen [[Leaves]]\n";
        let (header, body) = split_frontmatter(input);

        let header = header.unwrap();
        assert_eq!(header.content, "title: Tea\n");
        assert_eq!(header.lines_consumed, 3);
        assert_eq!(body, "Green [[Leaves]]\n");
    }

    #[test]
    fn test_split_without_header() {
        let input = "Just text\n---\n";
        assert_eq!(split_frontmatter(input), (None, input));
    }

    #[test]
    fn test_split_unclosed_header() {
        let input = "---\ntitle: Tea\n";
        assert_eq!(split_frontmatter(input), (None, input));
    }

    #[test]
    fn test_split_header_only() {
        let (header, body) = split_frontmatter("---\n---");
        assert_eq!(header.unwrap().content, "");
        assert_eq!(body, "");
    }

    #[test]
    fn test_read_document_with_header() {
        let text = "---\ntitle: Gardening\ntype: extended\nversion: 0\npresentation: { weight: bold, colour: \"#2a7\" }\n---\nPlant {{what}}";
        let doc = read_document(Path::new("notes/garden.stxt"), text, &Config::default()).unwrap();

        assert_eq!(doc.title.as_str(), "Gardening");
        assert_eq!(doc.document_type, DocumentType::Extended);
        assert_eq!(doc.parser_version, ParserVersion::V0);
        assert_eq!(doc.presentation.weight, Weight::Bold);
        assert_eq!(doc.presentation.color.as_deref(), Some("#2a7"));
        assert_eq!(doc.contents, "Plant {{what}}");
    }

    #[test]
    fn test_read_document_defaults() {
        let config = Config {
            default_type: DocumentType::Extended,
            ..Config::default()
        };
        let doc = read_document(Path::new("notes/Kitchen Herbs.stxt"), "Basil", &config).unwrap();

        assert_eq!(doc.title.as_str(), "Kitchen Herbs");
        assert_eq!(doc.document_type, DocumentType::Extended);
        assert_eq!(doc.presentation, TextStyle::default());
        assert_eq!(doc.contents, "Basil");
    }

    #[test]
    fn test_read_document_bad_yaml() {
        let text = "---\ntitle: Tea\ntype: [unclosed\n---\nbody";
        let err = read_document(Path::new("tea.stxt"), text, &Config::default()).unwrap_err();
        match err {
            SmalltextError::Parse { location, .. } => {
                assert_eq!(location.filename.as_deref(), Some(Path::new("tea.stxt")));
                assert!(location.line >= 2);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_document_unknown_version() {
        let text = "---\nversion: 42\n---\nbody";
        let err = read_document(Path::new("tea.stxt"), text, &Config::default()).unwrap_err();
        assert!(matches!(err, SmalltextError::Parse { .. }));
    }

    #[test]
    fn test_read_document_unknown_key() {
        let text = "---\nauthor: me\n---\nbody";
        assert!(read_document(Path::new("tea.stxt"), text, &Config::default()).is_err());
    }
}
