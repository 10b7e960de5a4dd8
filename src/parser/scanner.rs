//! Mention scanning: segmentation of contents into text blocks.

use std::collections::BTreeSet;

use crate::model::{DocumentId, TextBlock};
use crate::text_location::TextLocation;

use super::{ParseContext, ParsedContents, UnresolvedMention};

/// Outcome of scanning one mention starting at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionScan<'a> {
    /// The title resolved to a document.
    Resolved {
        /// The styled mention block.
        block: TextBlock,
        /// The mentioned document.
        target: DocumentId,
    },
    /// A well-formed mention naming no known document.
    Unresolved {
        /// The bracketed text as written.
        literal: &'a str,
        /// The trimmed title.
        title: &'a str,
    },
    /// Not a mention: an opener followed by another opener, or an opener
    /// with no closer before the end of the contents.
    Literal(&'a str),
}

/// Scans a mention starting at `*cursor`, advancing the cursor past it.
///
/// `contents[*cursor..]` must start with the mention opener. The cursor
/// always advances by at least the opener's length.
pub fn scan_mention<'a>(contents: &'a str, cursor: &mut usize, ctx: &ParseContext<'_>) -> MentionScan<'a> {
    let open = ctx.delimiters().mention_open.as_str();
    let close = ctx.delimiters().mention_close.as_str();

    let start = *cursor;
    let body_start = start + open.len();
    let rest = &contents[body_start..];

    let Some(close_rel) = rest.find(close) else {
        *cursor = contents.len();
        return MentionScan::Literal(&contents[start..]);
    };

    if let Some(nested) = rest[..close_rel].find(open) {
        *cursor = body_start + nested;
        return MentionScan::Literal(&contents[start..*cursor]);
    }

    let end = body_start + close_rel + close.len();
    *cursor = end;
    let literal = &contents[start..end];
    let title = rest[..close_rel].trim();

    match ctx.titles.resolve(title).filter(|_| !title.is_empty()) {
        Some(entry) => {
            tracing::trace!("Mention '{}' resolved to {}", title, entry.id);
            MentionScan::Resolved {
                block: TextBlock::mention(title, entry.presentation.clone(), entry.id),
                target: entry.id,
            }
        }
        None => {
            tracing::trace!("Mention '{}' unresolved", title);
            MentionScan::Unresolved { literal, title }
        }
    }
}

/// Segments `contents` into blocks in one forward pass.
///
/// Text between mentions, unresolved mentions and malformed openers are
/// coalesced into plain blocks; each resolved mention becomes an extended
/// block and contributes its target to the returned mention set.
pub fn scan(contents: &str, ctx: &ParseContext<'_>) -> ParsedContents {
    let open = ctx.delimiters().mention_open.as_str();

    let mut builder = BlockBuilder::default();
    let mut mentions = BTreeSet::new();
    let mut unresolved = Vec::new();
    let mut cursor = 0;

    if open.is_empty() {
        // an empty opener matches everywhere; nothing can be a mention
        builder.push_text(contents);
        return ParsedContents {
            blocks: builder.finish(),
            mentions,
            unresolved,
        };
    }

    while let Some(rel) = contents[cursor..].find(open) {
        let start = cursor + rel;
        builder.push_text(&contents[cursor..start]);
        cursor = start;

        match scan_mention(contents, &mut cursor, ctx) {
            MentionScan::Resolved { block, target } => {
                builder.push_block(block);
                mentions.insert(target);
            }
            MentionScan::Unresolved { literal, title } => {
                builder.push_text(literal);
                unresolved.push(UnresolvedMention {
                    title: title.to_string(),
                    location: TextLocation::from_offset(contents, start),
                });
            }
            MentionScan::Literal(text) => builder.push_text(text),
        }
    }
    builder.push_text(&contents[cursor..]);

    ParsedContents {
        blocks: builder.finish(),
        mentions,
        unresolved,
    }
}

/// Accumulates blocks, merging adjacent plain text.
#[derive(Debug, Default)]
struct BlockBuilder {
    blocks: Vec<TextBlock>,
    pending: String,
}

impl BlockBuilder {
    fn push_text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn push_block(&mut self, block: TextBlock) {
        self.flush();
        self.blocks.push(block);
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            self.blocks
                .push(TextBlock::plain(std::mem::take(&mut self.pending)));
        }
    }

    fn finish(mut self) -> Vec<TextBlock> {
        self.flush();
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Delimiters;
    use crate::model::{TextStyle, Title, TitleMap};
    use crate::parser::ParseSettings;
    use pretty_assertions::assert_eq;

    fn titles() -> TitleMap {
        let mut map = TitleMap::new();
        map.insert(Title::new("Garden"), DocumentId::new(0), TextStyle::new().bold())
            .unwrap();
        map.insert(Title::new("Tea"), DocumentId::new(1), TextStyle::new())
            .unwrap();
        map
    }

    fn run(contents: &str) -> ParsedContents {
        let titles = titles();
        let settings = ParseSettings::default();
        scan(contents, &ParseContext::new(&titles, &settings))
    }

    #[test]
    fn test_plain_text_single_block() {
        let parsed = run("just some text\nover two lines");
        assert_eq!(parsed.blocks, vec![TextBlock::plain("just some text\nover two lines")]);
        assert!(parsed.mentions.is_empty());
    }

    #[test]
    fn test_empty_contents() {
        let parsed = run("");
        assert!(parsed.blocks.is_empty());
    }

    #[test]
    fn test_resolved_mention() {
        let parsed = run("see [[Garden]] today");
        assert_eq!(
            parsed.blocks,
            vec![
                TextBlock::plain("see "),
                TextBlock::mention("Garden", TextStyle::new().bold(), DocumentId::new(0)),
                TextBlock::plain(" today"),
            ]
        );
        assert_eq!(parsed.mentions, BTreeSet::from([DocumentId::new(0)]));
    }

    #[test]
    fn test_title_is_trimmed() {
        let parsed = run("[[ Tea ]]");
        assert_eq!(parsed.blocks.len(), 1);
        assert_eq!(parsed.blocks[0].target(), Some(DocumentId::new(1)));
        assert_eq!(parsed.blocks[0].text(), "Tea");
    }

    #[test]
    fn test_repeated_mentions_deduplicated() {
        let parsed = run("[[Tea]] and [[Tea]] and [[Garden]]");
        assert_eq!(parsed.blocks.iter().filter(|b| b.is_mention()).count(), 3);
        assert_eq!(
            parsed.mentions,
            BTreeSet::from([DocumentId::new(0), DocumentId::new(1)])
        );
    }

    #[test]
    fn test_unresolved_mention_is_literal() {
        let parsed = run("before [[Nowhere]] after");
        assert_eq!(parsed.blocks, vec![TextBlock::plain("before [[Nowhere]] after")]);
        assert!(parsed.mentions.is_empty());
        assert_eq!(parsed.unresolved.len(), 1);
        assert_eq!(parsed.unresolved[0].title, "Nowhere");
        assert_eq!(parsed.unresolved[0].location.column, 8);
    }

    #[test]
    fn test_empty_title_unresolved() {
        let parsed = run("[[]] and [[  ]]");
        assert_eq!(parsed.blocks, vec![TextBlock::plain("[[]] and [[  ]]")]);
    }

    #[test]
    fn test_unterminated_mention() {
        let parsed = run("a [[Garden]] then [[Tea");
        assert_eq!(
            parsed.blocks,
            vec![
                TextBlock::plain("a "),
                TextBlock::mention("Garden", TextStyle::new().bold(), DocumentId::new(0)),
                TextBlock::plain(" then [[Tea"),
            ]
        );
        assert!(parsed.unresolved.is_empty());
    }

    #[test]
    fn test_nested_opener() {
        let parsed = run("[[oops [[Tea]]");
        assert_eq!(
            parsed.blocks,
            vec![
                TextBlock::plain("[[oops "),
                TextBlock::mention("Tea", TextStyle::new(), DocumentId::new(1)),
            ]
        );
    }

    #[test]
    fn test_stray_closer_is_text() {
        let parsed = run("]] no opener [[");
        assert_eq!(parsed.blocks, vec![TextBlock::plain("]] no opener [[")]);
    }

    #[test]
    fn test_adjacent_mentions() {
        let parsed = run("[[Tea]][[Garden]]");
        assert_eq!(parsed.blocks.len(), 2);
        assert!(parsed.blocks.iter().all(TextBlock::is_mention));
    }

    #[test]
    fn test_scan_mention_advances_cursor() {
        let titles = titles();
        let settings = ParseSettings::default();
        let ctx = ParseContext::new(&titles, &settings);
        let contents = "[[Tea]] rest";
        let mut cursor = 0;

        let result = scan_mention(contents, &mut cursor, &ctx);
        assert!(matches!(result, MentionScan::Resolved { target, .. } if target == DocumentId::new(1)));
        assert_eq!(cursor, 7);
    }

    #[test]
    fn test_custom_delimiters() {
        let titles = titles();
        let settings = ParseSettings {
            delimiters: Delimiters::new("@[", "]", "%{", "}"),
            ..ParseSettings::default()
        };
        let parsed = scan("ping @[Tea] and [[Garden]]", &ParseContext::new(&titles, &settings));
        assert_eq!(parsed.mentions, BTreeSet::from([DocumentId::new(1)]));
        assert_eq!(parsed.blocks.last(), Some(&TextBlock::plain(" and [[Garden]]")));
    }

    #[test]
    fn test_empty_opener_terminates() {
        let titles = titles();
        let settings = ParseSettings {
            delimiters: Delimiters::new("", "]]", "{{", "}}"),
            ..ParseSettings::default()
        };
        let parsed = scan("hello [[Tea]]", &ParseContext::new(&titles, &settings));
        assert_eq!(parsed.blocks, vec![TextBlock::plain("hello [[Tea]]")]);
        assert!(parsed.mentions.is_empty());
    }

    #[test]
    fn test_multibyte_text() {
        let parsed = run("café ☕ [[Tea]] ✓");
        assert_eq!(parsed.blocks.len(), 3);
        assert_eq!(parsed.blocks[0].text(), "café ☕ ");
        assert_eq!(parsed.blocks[2].text(), " ✓");
    }
}
