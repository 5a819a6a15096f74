use serde::Serialize;

use super::inline::{Inline, parse_inlines};

const HEADING2_PREFIX: &str = "## ";
const HEADING3_PREFIX: &str = "### ";
const LIST_PREFIXES: [&str; 2] = ["- ", "* "];

/// The structural role of one input line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "inlines", rename_all = "snake_case")]
pub enum Block {
    Heading2(Vec<Inline>),
    Heading3(Vec<Inline>),
    ListItem(Vec<Inline>),
    Paragraph(Vec<Inline>),
    Blank,
}

/// Variant tag of a [`Block`], without its content.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Heading2,
    Heading3,
    ListItem,
    Paragraph,
    Blank,
}

impl BlockKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heading2 => "heading2",
            Self::Heading3 => "heading3",
            Self::ListItem => "list_item",
            Self::Paragraph => "paragraph",
            Self::Blank => "blank",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Block {
    /// Classify and inline-process a single line (no `'\n'` expected).
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        if line.trim().is_empty() {
            return Self::Blank;
        }
        if let Some(rest) = line.strip_prefix(HEADING2_PREFIX) {
            return Self::Heading2(parse_inlines(rest));
        }
        if let Some(rest) = line.strip_prefix(HEADING3_PREFIX) {
            return Self::Heading3(parse_inlines(rest));
        }
        if let Some(rest) = LIST_PREFIXES
            .iter()
            .find_map(|prefix| line.strip_prefix(prefix))
        {
            return Self::ListItem(parse_inlines(rest));
        }
        Self::Paragraph(parse_inlines(line))
    }

    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        match self {
            Self::Heading2(_) => BlockKind::Heading2,
            Self::Heading3(_) => BlockKind::Heading3,
            Self::ListItem(_) => BlockKind::ListItem,
            Self::Paragraph(_) => BlockKind::Paragraph,
            Self::Blank => BlockKind::Blank,
        }
    }

    /// Inline nodes of the block. Empty for `Blank`.
    #[must_use]
    pub fn inlines(&self) -> &[Inline] {
        match self {
            Self::Heading2(inlines)
            | Self::Heading3(inlines)
            | Self::ListItem(inlines)
            | Self::Paragraph(inlines) => inlines,
            Self::Blank => &[],
        }
    }

    /// Concatenated visible text of the inlines, markup dropped.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.inlines().iter().map(Inline::plain_text).collect()
    }

    /// Rebuild a source line from the block: its marker followed by the
    /// plain text. Formatting the result yields a block of the same kind
    /// whenever the original line had no links or emphasis.
    #[must_use]
    pub fn to_plain_line(&self) -> String {
        let marker = match self {
            Self::Heading2(_) => HEADING2_PREFIX,
            Self::Heading3(_) => HEADING3_PREFIX,
            Self::ListItem(_) => LIST_PREFIXES[0],
            Self::Paragraph(_) | Self::Blank => "",
        };
        format!("{marker}{}", self.plain_text())
    }
}

/// Format raw text into one block per `'\n'`-separated line, in order.
#[must_use]
pub fn format_content(text: &str) -> Vec<Block> {
    text.split('\n').map(Block::from_line).collect()
}
