//! Markdown rendering of parsed documents.
//!
//! Plain text is copied through unchanged, so markdown already present in a
//! note survives. The output is meant for reading; it does not parse back
//! into the same blocks.

use crate::graph::DocumentSet;
use crate::model::{Document, TextBlock, TextStyle};

/// Renders a document's current blocks as markdown.
pub fn to_markdown(doc: &Document, set: &DocumentSet) -> String {
    let mut out = String::with_capacity(doc.contents().len());
    for block in doc.text_blocks() {
        out.push_str(&block_to_markdown(block, set));
    }
    out
}

/// Renders a single block. Mentions link to their target's title.
pub fn block_to_markdown(block: &TextBlock, set: &DocumentSet) -> String {
    match block {
        TextBlock::Plain(text) => text.as_str().to_string(),
        TextBlock::Extended(ext) => {
            let styled = apply_style(&ext.text, &ext.style);
            match ext.target.and_then(|id| set.get(id)) {
                Some(target) => format!("[{}](<{}>)", styled, target.title()),
                None => styled,
            }
        }
    }
}

fn apply_style(text: &str, style: &TextStyle) -> String {
    let mut out = text.to_string();

    let mut css = Vec::new();
    if let Some(font) = &style.font {
        css.push(format!("font-family: {}", font));
    }
    if let Some(size) = style.size {
        css.push(format!("font-size: {}pt", size));
    }
    if let Some(color) = &style.color {
        css.push(format!("color: {}", color));
    }
    if !css.is_empty() {
        out = format!("<span style=\"{}\">{}</span>", css.join("; "), out);
    }

    if style.underline {
        out = format!("<u>{}</u>", out);
    }
    if style.is_italic() {
        out = format!("*{}*", out);
    }
    if style.is_bold() {
        out = format!("**{}**", out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_passes_through() {
        let mut set = DocumentSet::new();
        let id = set
            .create_document_with_contents("Note", DocumentType::Lite, "# Heading\n_as is_ [[Missing]]")
            .unwrap();
        let doc = set.get(id).unwrap();
        assert_eq!(to_markdown(doc, &set), "# Heading\n_as is_ [[Missing]]");
    }

    #[test]
    fn test_mention_becomes_link() {
        let mut set = DocumentSet::new();
        set.create_document("Green Tea", DocumentType::Lite).unwrap();
        let id = set
            .create_document_with_contents("Note", DocumentType::Lite, "Try [[Green Tea]].")
            .unwrap();
        let doc = set.get(id).unwrap();
        assert_eq!(to_markdown(doc, &set), "Try [Green Tea](<Green Tea>).");
    }

    #[test]
    fn test_mention_uses_presentation() {
        let mut set = DocumentSet::new();
        let tea = set.create_document("Tea", DocumentType::Lite).unwrap();
        set.set_presentation(tea, TextStyle::new().bold().italic())
            .unwrap();
        let id = set
            .create_document_with_contents("Note", DocumentType::Lite, "[[Tea]]")
            .unwrap();
        let doc = set.get(id).unwrap();
        assert_eq!(to_markdown(doc, &set), "[***Tea***](<Tea>)");
    }

    #[test]
    fn test_style_rendering() {
        let style = TextStyle::new()
            .underlined()
            .with_font("Serif")
            .with_size(12)
            .with_color("teal");
        assert_eq!(
            apply_style("x", &style),
            "<u><span style=\"font-family: Serif; font-size: 12pt; color: teal\">x</span></u>"
        );
        assert_eq!(apply_style("x", &TextStyle::new()), "x");
    }
}
