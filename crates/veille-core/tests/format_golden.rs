//! Golden-output tests for the content formatter.

use pretty_assertions::assert_eq;
use rstest::rstest;
use veille_core::format::{Block, BlockKind, Inline, format_content};

#[test]
fn link_extraction_splits_surrounding_text() {
    assert_eq!(
        format_content("See [Report](https://x.test/a) now"),
        vec![Block::Paragraph(vec![
            Inline::text("See "),
            Inline::link("Report", "https://x.test/a"),
            Inline::text(" now"),
        ])]
    );
}

#[test]
fn emphasis_toggles_on_and_off() {
    assert_eq!(
        format_content("a **b** c"),
        vec![Block::Paragraph(vec![
            Inline::text("a "),
            Inline::emphasis("b"),
            Inline::text(" c"),
        ])]
    );
}

#[test]
fn dangling_emphasis_runs_to_end_of_segment() {
    assert_eq!(
        format_content("a **b"),
        vec![Block::Paragraph(vec![Inline::text("a "), Inline::emphasis("b")])]
    );
}

#[test]
fn dangling_emphasis_stops_at_link() {
    assert_eq!(
        format_content("a **b [l](u) c"),
        vec![Block::Paragraph(vec![
            Inline::text("a "),
            Inline::emphasis("b "),
            Inline::link("l", "u"),
            Inline::text(" c"),
        ])]
    );
}

#[test]
fn report_with_every_construct() {
    let report = "## Title\n### Sub\n- item\n* **bold** item\n\nBody [S](https://s.test) end";
    assert_eq!(
        format_content(report),
        vec![
            Block::Heading2(vec![Inline::text("Title")]),
            Block::Heading3(vec![Inline::text("Sub")]),
            Block::ListItem(vec![Inline::text("item")]),
            Block::ListItem(vec![Inline::emphasis("bold"), Inline::text(" item")]),
            Block::Blank,
            Block::Paragraph(vec![
                Inline::text("Body "),
                Inline::link("S", "https://s.test"),
                Inline::text(" end"),
            ]),
        ]
    );
}

#[rstest]
#[case("", BlockKind::Blank)]
#[case("   \t", BlockKind::Blank)]
#[case("## Title", BlockKind::Heading2)]
#[case("##Title", BlockKind::Paragraph)]
#[case("### Title", BlockKind::Heading3)]
#[case("###Title", BlockKind::Paragraph)]
#[case("- item", BlockKind::ListItem)]
#[case("* item", BlockKind::ListItem)]
#[case("-item", BlockKind::Paragraph)]
#[case("  - item", BlockKind::Paragraph)]
#[case(" ## Title", BlockKind::Paragraph)]
#[case("#### Deep", BlockKind::Paragraph)]
#[case("plain", BlockKind::Paragraph)]
fn classifies_line_prefix(#[case] line: &str, #[case] expected: BlockKind) {
    let blocks = format_content(line);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind(), expected);
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("one")]
#[case("one\ntwo\n\nthree")]
#[case("## a\n- b\n* c\n### d\n   \n[x](y)\n**")]
#[case("\r\nwindows\r\n")]
fn one_block_per_line(#[case] text: &str) {
    let blocks = format_content(text);
    assert_eq!(blocks.len(), text.split('\n').count());
}

#[rstest]
#[case("## Title\n- item\n* other\n### Sub\n\nplain text\n  indented")]
#[case("-nospace\n##nospace\n   ")]
fn plain_projection_preserves_classification(#[case] text: &str) {
    let original = format_content(text);
    let projected = original
        .iter()
        .map(Block::to_plain_line)
        .collect::<Vec<_>>()
        .join("\n");
    let reformatted = format_content(&projected);

    let kinds = |blocks: &[Block]| blocks.iter().map(Block::kind).collect::<Vec<_>>();
    assert_eq!(kinds(&reformatted), kinds(&original));
}

#[test]
fn formatting_is_deterministic() {
    let text = "## T\n- **a** [b](c) **d";
    assert_eq!(format_content(text), format_content(text));
}

#[test]
fn pathological_nesting_still_formats() {
    let text = "[[[]]](((**)))**[a](b**)**[";
    let blocks = format_content(text);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind(), BlockKind::Paragraph);
}
