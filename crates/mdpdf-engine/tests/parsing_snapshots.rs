use mdpdf_engine::parsing::{blocks::Block, parse_document};
use rstest::rstest;

#[rstest]
#[case("readme")]
#[case("inline_edge_cases")]
#[case("block_precedence")]
#[case("unterminated_fence")]
fn fixture_snapshots(#[case] name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let doc = parse_document(&md);
    insta::assert_snapshot!(name, doc.dump());
}

/// Code blocks never contain inline markup, whatever their content.
#[test]
fn code_blocks_are_never_inline_processed() {
    let md = "```\n**x** `y`\n```";
    let doc = parse_document(md);

    assert_eq!(doc.blocks.len(), 1);
    match &doc.blocks[0] {
        Block::CodeBlock { text } => assert_eq!(text, "**x** `y`"),
        other => panic!("expected CodeBlock, got {other:?}"),
    }
}

/// Every inline-bearing block round-trips its visible text.
#[test]
fn plain_text_matches_source_without_delimiters() {
    let doc = parse_document("Some **bold** and `code`.");
    assert_eq!(doc.blocks[0].plain_text(), "Some bold and code.");
}

#[test]
fn document_order_is_preserved() {
    let md = "# A\npara\n- b\n1. c\n---\n```\nd\n```\ntail";
    let kinds: Vec<&str> = parse_document(md)
        .blocks
        .iter()
        .map(|b| match b {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::CodeBlock { .. } => "code",
            Block::BulletItem { .. } => "bullet",
            Block::NumberedItem { .. } => "numbered",
            Block::Rule => "rule",
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "bullet",
            "numbered",
            "rule",
            "code",
            "paragraph"
        ]
    );
}
