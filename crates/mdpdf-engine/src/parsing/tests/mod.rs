//! Behaviour tests for the parsing module.
//!
//! Fixture-driven snapshot tests live in `tests/parsing_snapshots.rs`; these
//! cover block boundaries and precedence with hand-built expectations.

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{Block, BlockBuilder, MarkdownLineClassifier},
    inline::InlineNode,
    parse_document,
};

fn text(s: &str) -> InlineNode {
    InlineNode::Text(s.to_string())
}

fn code(s: &str) -> InlineNode {
    InlineNode::Code(s.to_string())
}

fn bold(s: &str) -> InlineNode {
    InlineNode::Bold(vec![text(s)])
}

fn markup(md: &str) -> Vec<String> {
    parse_document(md)
        .blocks
        .iter()
        .map(Block::to_string)
        .collect()
}

#[test]
fn end_to_end_readme_sample() {
    let md = "# Title\n\nSome **bold** and `code`.\n\n- item one\n- item two\n";
    let doc = parse_document(md);

    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: 1,
                text: vec![text("Title")],
            },
            Block::Paragraph {
                text: vec![
                    text("Some "),
                    bold("bold"),
                    text(" and "),
                    code("code"),
                    text("."),
                ],
            },
            Block::BulletItem {
                text: vec![text("item one")],
            },
            Block::BulletItem {
                text: vec![text("item two")],
            },
        ]
    );
    assert_eq!(
        doc.blocks[1].markup(),
        "Some <b>bold</b> and <font face=\"Courier\">code</font>."
    );
}

#[test]
fn unbroken_lines_form_one_paragraph() {
    let md = "first line\nsecond **line**\n  third line";
    assert_eq!(
        markup(md),
        vec!["paragraph: first line second <b>line</b>   third line"]
    );
}

#[test]
fn blank_line_splits_paragraphs() {
    assert_eq!(
        markup("one\n\ntwo\n   \nthree"),
        vec!["paragraph: one", "paragraph: two", "paragraph: three"]
    );
}

#[test]
fn fenced_block_yields_one_code_block() {
    let doc = parse_document("```\nx = 1\n```");
    assert_eq!(
        doc.blocks,
        vec![Block::CodeBlock {
            text: "x = 1".to_string()
        }]
    );
}

#[test]
fn fence_content_is_raw() {
    let md = "```python\n# not a heading\n\n- not a bullet\n**not bold**\n```";
    assert_eq!(
        parse_document(md).blocks,
        vec![Block::CodeBlock {
            text: "# not a heading\n\n- not a bullet\n**not bold**".to_string()
        }]
    );
}

#[test]
fn empty_fence_yields_empty_code_block() {
    assert_eq!(
        parse_document("```\n```").blocks,
        vec![Block::CodeBlock {
            text: String::new()
        }]
    );
}

#[test]
fn unterminated_fence_drops_its_content() {
    let doc = parse_document("before\n\n```\nlost line\nanother");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            text: vec![text("before")]
        }]
    );
}

#[test]
fn unterminated_fence_alone_yields_nothing() {
    assert!(parse_document("```\ncode").blocks.is_empty());
}

#[test]
fn fence_open_ends_buffered_paragraph() {
    assert_eq!(
        markup("intro text\n```\ncode\n```\noutro"),
        vec![
            "paragraph: intro text",
            "code: \"code\"",
            "paragraph: outro"
        ]
    );
}

#[test]
fn heading_three_is_level_three() {
    assert_eq!(
        parse_document("### Title").blocks,
        vec![Block::Heading {
            level: 3,
            text: vec![text("Title")],
        }]
    );
}

#[test]
fn heading_flushes_paragraph() {
    assert_eq!(
        markup("para\n## Next"),
        vec!["paragraph: para", "heading(2): Next"]
    );
}

#[test]
fn heading_text_is_inline_processed() {
    assert_eq!(
        markup("# The `mdpdf` **tool**"),
        vec!["heading(1): The <font face=\"Courier\">mdpdf</font> <b>tool</b>"]
    );
}

#[test]
fn numbered_item_keeps_numeral() {
    assert_eq!(
        markup("1. first\n2. **second**"),
        vec!["numbered: 1. first", "numbered: 2. <b>second</b>"]
    );
}

#[test]
fn list_item_flushes_paragraph() {
    assert_eq!(
        markup("lead in\n- item"),
        vec!["paragraph: lead in", "bullet: item"]
    );
}

#[test]
fn text_after_list_item_starts_paragraph() {
    assert_eq!(
        markup("- item\ncontinuation"),
        vec!["bullet: item", "paragraph: continuation"]
    );
}

#[test]
fn rule_flushes_paragraph() {
    assert_eq!(
        markup("above\n---\nbelow"),
        vec!["paragraph: above", "rule", "paragraph: below"]
    );
}

#[test]
fn rule_with_trailing_text_is_paragraph_text() {
    assert_eq!(markup("--- x"), vec!["paragraph: --- x"]);
}

#[test]
fn crlf_input_matches_lf_input() {
    let lf = parse_document("# T\n\nbody\n```\nc\n```\n");
    let crlf = parse_document("# T\r\n\r\nbody\r\n```\r\nc\r\n```\r\n");
    assert_eq!(lf.blocks, crlf.blocks);
}

#[test]
fn empty_document() {
    assert!(parse_document("").blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n\n  \n").blocks.is_empty());
}

#[test]
fn title_is_first_level_one_heading() {
    let doc = parse_document("## Sub\n# Main **Title**\n# Other");
    assert_eq!(doc.title().as_deref(), Some("Main Title"));
}

#[test]
fn title_missing_without_level_one_heading() {
    assert_eq!(parse_document("## Only sub").title(), None);
}

#[test]
fn dump_joins_lines() {
    let doc = parse_document("# A\n\n---");
    assert_eq!(doc.dump(), "heading(1): A\nrule");
}

#[test]
fn list_context_tracking() {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    builder.push(&classifier.classify("- a"));
    assert!(builder.in_list());
    builder.push(&classifier.classify("1. b"));
    assert!(builder.in_list());
    builder.push(&classifier.classify(""));
    assert!(!builder.in_list());

    builder.push(&classifier.classify("- c"));
    builder.push(&classifier.classify("# heading"));
    assert!(!builder.in_list());

    builder.push(&classifier.classify("- d"));
    builder.push(&classifier.classify("---"));
    assert!(!builder.in_list());

    assert_eq!(builder.finish().len(), 6);
}
