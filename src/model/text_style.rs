//! Display styles for extended text.

use serde::{Deserialize, Serialize};

/// Font weight of a styled block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    #[default]
    Regular,
    Bold,
}

/// Font slant of a styled block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slant {
    #[default]
    Upright,
    Italic,
}

/// Style attributes carried by an extended block.
///
/// A document's presentation setting is a `TextStyle`; every mention of
/// that document copies it into the generated block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub weight: Weight,
    pub slant: Slant,
    pub underline: bool,
    /// Font family name; `None` keeps the renderer's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Font size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u16>,
    /// CSS-style colour, e.g. `#2a7` or `teal`.
    #[serde(skip_serializing_if = "Option::is_none", alias = "colour")]
    pub color: Option<String>,
}

impl TextStyle {
    /// Creates the default (unstyled) style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets bold weight.
    pub fn bold(mut self) -> Self {
        self.weight = Weight::Bold;
        self
    }

    /// Sets italic slant.
    pub fn italic(mut self) -> Self {
        self.slant = Slant::Italic;
        self
    }

    /// Sets underline.
    pub fn underlined(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Sets the font family.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Sets the font size.
    pub fn with_size(mut self, size: u16) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the colour.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_bold(&self) -> bool {
        self.weight == Weight::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.slant == Slant::Italic
    }

    /// Returns true if no attribute differs from the default.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let style = TextStyle::new().bold().italic().with_color("teal");
        assert!(style.is_bold());
        assert!(style.is_italic());
        assert!(!style.underline);
        assert_eq!(style.color.as_deref(), Some("teal"));
        assert!(!style.is_plain());
        assert!(TextStyle::new().is_plain());
    }

    #[test]
    fn test_deserialize_partial() {
        let style: TextStyle =
            serde_yaml::from_str("weight: bold\ncolour: \"#2a7\"\n").unwrap();
        assert!(style.is_bold());
        assert_eq!(style.slant, Slant::Upright);
        assert_eq!(style.color.as_deref(), Some("#2a7"));
    }
}
