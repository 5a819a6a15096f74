//! Terminal layout of formatted reports.

use std::fmt::Write;

use veille_core::entities::Citation;
use veille_core::format::{Block, Inline};

const BOLD: &str = "\u{1b}[1m";
const HEADING: &str = "\u{1b}[1;4m";
const LINK: &str = "\u{1b}[4;36m";
const RESET: &str = "\u{1b}[0m";

/// One output line per block, plus a rule under each heading.
#[must_use]
pub fn render_blocks(blocks: &[Block], color: bool) -> String {
    let mut lines = Vec::with_capacity(blocks.len());
    for block in blocks {
        match block {
            Block::Heading2(inlines) => {
                lines.push(heading_line(inlines, color));
                lines.push("=".repeat(block.plain_text().chars().count()));
            }
            Block::Heading3(inlines) => {
                lines.push(heading_line(inlines, color));
                lines.push("-".repeat(block.plain_text().chars().count()));
            }
            Block::ListItem(inlines) => lines.push(format!("  • {}", render_inlines(inlines, color))),
            Block::Paragraph(inlines) => lines.push(render_inlines(inlines, color)),
            Block::Blank => lines.push(String::new()),
        }
    }
    lines.join("\n")
}

fn heading_line(inlines: &[Inline], color: bool) -> String {
    if color {
        let text: String = inlines.iter().map(Inline::plain_text).collect();
        format!("{HEADING}{text}{RESET}")
    } else {
        render_inlines(inlines, false)
    }
}

/// Emphasis is bold and links show their uri; without color the text is plain.
#[must_use]
pub fn render_inlines(inlines: &[Inline], color: bool) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(text),
            Inline::Emphasis(text) if color => {
                let _ = write!(out, "{BOLD}{text}{RESET}");
            }
            Inline::Emphasis(text) => out.push_str(text),
            Inline::Link { label, uri } if color => {
                let _ = write!(out, "{label} {LINK}<{uri}>{RESET}");
            }
            Inline::Link { label, uri } => {
                let _ = write!(out, "{label} <{uri}>");
            }
        }
    }
    out
}

/// Numbered source list, empty when there are no citations.
#[must_use]
pub fn render_citations(citations: &[Citation], color: bool) -> String {
    if citations.is_empty() {
        return String::new();
    }
    let mut out = String::from(if color { "\u{1b}[1mSources\u{1b}[0m" } else { "Sources" });
    for (index, citation) in citations.iter().enumerate() {
        let title = citation.display_title();
        if color {
            let _ = write!(out, "\n  {}. {title} {LINK}<{}>{RESET}", index + 1, citation.uri);
        } else {
            let _ = write!(out, "\n  {}. {title} <{}>", index + 1, citation.uri);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use veille_core::entities::Citation;
    use veille_core::format::format_content;

    use super::{render_blocks, render_citations};

    #[test]
    fn plain_layout_of_a_report() {
        let blocks = format_content(
            "## Overview\n\nSee **this** and [Src](https://a.example).\n- item\n### Next",
        );
        assert_eq!(
            render_blocks(&blocks, false),
            "Overview\n========\n\nSee this and Src <https://a.example>.\n  • item\nNext\n----"
        );
    }

    #[test]
    fn colored_layout_uses_ansi() {
        let blocks = format_content("A **key** term");
        assert_eq!(
            render_blocks(&blocks, true),
            "A \u{1b}[1mkey\u{1b}[0m term"
        );
    }

    #[test]
    fn one_line_per_non_heading_block() {
        let blocks = format_content("a\n\nb\n- c");
        assert_eq!(render_blocks(&blocks, false).lines().count(), 4);
    }

    #[test]
    fn citations_are_numbered_with_fallback_titles() {
        let citations = vec![
            Citation {
                title: Some(String::from("Le Monde")),
                uri: String::from("https://lemonde.fr/x"),
            },
            Citation {
                title: None,
                uri: String::from("https://b.example"),
            },
        ];
        assert_eq!(
            render_citations(&citations, false),
            "Sources\n  1. Le Monde <https://lemonde.fr/x>\n  2. https://b.example <https://b.example>"
        );
        assert_eq!(render_citations(&[], false), "");
    }
}
