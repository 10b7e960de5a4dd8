//! Text blocks: the units a parse produces.

use serde::{Deserialize, Serialize};

use super::document_id::DocumentId;
use super::text_style::TextStyle;

/// Literal text with no embedded semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlainText(pub String);

impl PlainText {
    /// Creates new plain text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the text content.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlainText {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PlainText {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Text with display attributes, optionally pointing at another document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedTextBlock {
    /// The displayed text.
    pub text: String,
    /// Display attributes.
    pub style: TextStyle,
    /// The mentioned document, if this block is a mention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<DocumentId>,
}

impl ExtendedTextBlock {
    /// Creates a styled block without a target.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            target: None,
        }
    }

    /// Creates a mention of `target`, rendered with the target's presentation.
    pub fn mention(text: impl Into<String>, style: TextStyle, target: DocumentId) -> Self {
        Self {
            text: text.into(),
            style,
            target: Some(target),
        }
    }
}

/// A unit of processed content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TextBlock {
    /// Literal text.
    Plain(PlainText),
    /// Styled text, possibly a resolved mention.
    Extended(ExtendedTextBlock),
}

impl TextBlock {
    /// Creates a plain block.
    pub fn plain(s: impl Into<String>) -> Self {
        TextBlock::Plain(PlainText::new(s))
    }

    /// Creates a mention block.
    pub fn mention(text: impl Into<String>, style: TextStyle, target: DocumentId) -> Self {
        TextBlock::Extended(ExtendedTextBlock::mention(text, style, target))
    }

    /// Returns the displayed text.
    pub fn text(&self) -> &str {
        match self {
            TextBlock::Plain(p) => p.as_str(),
            TextBlock::Extended(e) => &e.text,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, TextBlock::Plain(_))
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, TextBlock::Extended(_))
    }

    /// Returns true if this block is a resolved mention.
    pub fn is_mention(&self) -> bool {
        self.target().is_some()
    }

    /// Returns the style of an extended block.
    pub fn style(&self) -> Option<&TextStyle> {
        match self {
            TextBlock::Plain(_) => None,
            TextBlock::Extended(e) => Some(&e.style),
        }
    }

    /// Returns the mentioned document of an extended block.
    pub fn target(&self) -> Option<DocumentId> {
        match self {
            TextBlock::Plain(_) => None,
            TextBlock::Extended(e) => e.target,
        }
    }
}
