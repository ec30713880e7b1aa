//! Markup rendering for inline nodes.
//!
//! The markup follows the mini-XML convention of flowable layout engines:
//! `<b>` for bold and `<font face="Courier">` for code. Only code content is
//! escaped; plain text is emitted verbatim, so a literal `<` in prose reaches
//! the markup unescaped.

use super::{kinds::CodeSpan, parser::parse_inline, types::InlineNode};

/// Escapes the three XML metacharacters `&`, `<` and `>`.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn to_markup(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &InlineNode) {
    match node {
        InlineNode::Text(s) => out.push_str(s),
        InlineNode::Code(s) => {
            out.push_str("<font face=\"");
            out.push_str(CodeSpan::FONT_FACE);
            out.push_str("\">");
            out.push_str(&escape_xml(s));
            out.push_str("</font>");
        }
        InlineNode::Bold(children) => {
            out.push_str("<b>");
            for child in children {
                write_node(out, child);
            }
            out.push_str("</b>");
        }
    }
}

/// Parses `text` and renders it straight to markup.
pub fn process_inline(text: &str) -> String {
    to_markup(&parse_inline(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn bold_markup() {
        assert_eq!(process_inline("**bold**"), "<b>bold</b>");
    }

    #[test]
    fn code_markup() {
        assert_eq!(
            process_inline("`code`"),
            "<font face=\"Courier\">code</font>"
        );
    }

    #[test]
    fn code_containing_bold_delimiters() {
        assert_eq!(
            process_inline("`**not bold**`"),
            "<font face=\"Courier\">**not bold**</font>"
        );
    }

    #[test]
    fn code_content_is_escaped() {
        assert_eq!(
            process_inline("use `a < b && c > d`"),
            "use <font face=\"Courier\">a &lt; b &amp;&amp; c &gt; d</font>"
        );
    }

    #[test]
    fn plain_text_is_not_escaped() {
        assert_eq!(process_inline("a < b & c"), "a < b & c");
    }

    #[test]
    fn bold_wrapping_code() {
        assert_eq!(
            process_inline("**see `x<y`**"),
            "<b>see <font face=\"Courier\">x&lt;y</font></b>"
        );
    }

    #[test]
    fn mixed_paragraph() {
        assert_eq!(
            process_inline("Some **bold** and `code`."),
            "Some <b>bold</b> and <font face=\"Courier\">code</font>."
        );
    }

    #[rstest]
    #[case("")]
    #[case("plain words")]
    #[case("a < b & c > d")]
    #[case("snake_case and __dunder__")]
    #[case("  leading and trailing  ")]
    #[case("unicode: ünïcödé — ✓")]
    fn text_without_delimiters_is_unchanged(#[case] input: &str) {
        assert_eq!(process_inline(input), input);
    }

    #[test]
    fn escape_xml_handles_all_metacharacters() {
        assert_eq!(escape_xml("<&>"), "&lt;&amp;&gt;");
    }
}
