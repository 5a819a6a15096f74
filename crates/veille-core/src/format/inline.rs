use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `[label](uri)`: label has no `]`, uri has no `)`, both non-empty.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern should compile")
});

const EMPHASIS_DELIMITER: &str = "**";

/// A styled run of text inside one line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Emphasis(String),
    Link { label: String, uri: String },
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn emphasis(value: impl Into<String>) -> Self {
        Self::Emphasis(value.into())
    }

    pub fn link(label: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            uri: uri.into(),
        }
    }

    /// Visible text with all markup dropped.
    #[must_use]
    pub fn plain_text(&self) -> &str {
        match self {
            Self::Text(value) | Self::Emphasis(value) => value,
            Self::Link { label, .. } => label,
        }
    }
}

/// Split one line's content into inline nodes.
///
/// Links are extracted first; emphasis is only looked for in the text between
/// links, so `**` inside a uri is never interpreted.
#[must_use]
pub fn parse_inlines(content: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut last = 0;

    for captures in LINK_PATTERN.captures_iter(content) {
        let (Some(whole), Some(label), Some(uri)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };
        push_styled(&mut inlines, &content[last..whole.start()]);
        inlines.push(Inline::link(label.as_str(), uri.as_str()));
        last = whole.end();
    }
    push_styled(&mut inlines, &content[last..]);

    inlines
}

/// Even pieces are text, odd pieces emphasis. An unmatched trailing `**`
/// emphasizes the rest of the segment.
fn push_styled(inlines: &mut Vec<Inline>, segment: &str) {
    if segment.is_empty() {
        return;
    }
    if !segment.contains(EMPHASIS_DELIMITER) {
        inlines.push(Inline::text(segment));
        return;
    }

    for (index, piece) in segment.split(EMPHASIS_DELIMITER).enumerate() {
        if piece.is_empty() {
            continue;
        }
        if index % 2 == 1 {
            inlines.push(Inline::emphasis(piece));
        } else {
            inlines.push(Inline::text(piece));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_segment_is_single_text() {
        assert_eq!(parse_inlines("just words"), vec![Inline::text("just words")]);
    }

    #[test]
    fn empty_content_has_no_inlines() {
        assert!(parse_inlines("").is_empty());
    }

    #[test]
    fn adjacent_links_produce_no_empty_text() {
        assert_eq!(
            parse_inlines("[a](u1)[b](u2)"),
            vec![Inline::link("a", "u1"), Inline::link("b", "u2")]
        );
    }

    #[test]
    fn emphasis_does_not_cross_link_boundary() {
        assert_eq!(
            parse_inlines("**open [x](u) close**"),
            vec![
                Inline::emphasis("open "),
                Inline::link("x", "u"),
                Inline::text(" close"),
            ]
        );
    }

    #[test]
    fn emphasis_markers_inside_uri_are_inert() {
        assert_eq!(
            parse_inlines("[x](https://a.test/**b**)"),
            vec![Inline::link("x", "https://a.test/**b**")]
        );
    }

    #[test]
    fn empty_label_is_not_a_link() {
        assert_eq!(parse_inlines("[](u)"), vec![Inline::text("[](u)")]);
    }

    #[test]
    fn leading_delimiter_emphasizes_first_word() {
        assert_eq!(
            parse_inlines("**Key** term"),
            vec![Inline::emphasis("Key"), Inline::text(" term")]
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Inline::link("Report", "https://x.test/a")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "link", "value": {"label": "Report", "uri": "https://x.test/a"}})
        );
    }
}
