use genpdf::{
    Document, Element, Margins,
    elements::{Break, LinearLayout, PaddedElement, Paragraph},
    fonts::{Font, FontFamily},
    style::{Color, Style, StyledString},
};

use crate::parsing::{blocks::Block, inline::InlineNode};

use super::{
    rule::HorizontalRule,
    style::{StyleSheet, pt},
};

/// Maps content blocks onto genpdf elements and pushes them in order.
pub struct ElementMapper<'a> {
    sheet: &'a StyleSheet,
    code_family: FontFamily<Font>,
}

impl<'a> ElementMapper<'a> {
    pub fn new(sheet: &'a StyleSheet, code_family: FontFamily<Font>) -> Self {
        Self { sheet, code_family }
    }

    pub fn push_block(&self, doc: &mut Document, block: &Block) {
        match block {
            Block::Heading { level, text } => {
                let heading = self.sheet.heading(*level);
                self.push_gap(doc, heading.space_before_pt);
                doc.push(self.paragraph(None, text, heading.to_style()));
                self.push_gap(doc, heading.space_after_pt);
            }
            Block::Paragraph { text } | Block::NumberedItem { text } => {
                doc.push(self.paragraph(None, text, self.sheet.body.to_style()));
            }
            Block::BulletItem { text } => {
                doc.push(self.paragraph(Some(self.sheet.bullet), text, self.sheet.body.to_style()));
            }
            Block::CodeBlock { text } => doc.push(self.code_block(text)),
            Block::Rule => {
                let (r, g, b) = self.sheet.rule_color;
                doc.push(HorizontalRule::new(
                    pt(self.sheet.rule_height_pt),
                    Color::Rgb(r, g, b),
                ));
            }
        }

        if let Some(gap) = self.sheet.gap_after(block) {
            self.push_gap(doc, gap);
        }
    }

    fn push_gap(&self, doc: &mut Document, gap_pt: f64) {
        if gap_pt > 0.0 {
            doc.push(Break::new(self.sheet.gap_lines(gap_pt)));
        }
    }

    fn code_style(&self, base: Style) -> Style {
        base.with_font_family(self.code_family)
    }

    fn paragraph(&self, prefix: Option<&str>, nodes: &[InlineNode], base: Style) -> Paragraph {
        let mut paragraph = Paragraph::default();
        if let Some(prefix) = prefix {
            paragraph.push(StyledString::new(prefix, base));
        }
        for s in styled_strings(nodes, base, self.code_style(base)) {
            paragraph.push(s);
        }
        paragraph
    }

    /// One monospaced paragraph per source line, indented as a unit.
    fn code_block(&self, text: &str) -> PaddedElement<LinearLayout> {
        let style = self.code_style(self.sheet.code.to_style());
        let mut layout = LinearLayout::vertical();
        for line in text.split('\n') {
            // An empty paragraph has no height; keep blank code lines visible.
            let line = if line.is_empty() { " " } else { line };
            layout.push(Paragraph::new(StyledString::new(line, style)));
        }
        layout.padded(Margins::trbl(0.0, 0.0, 0.0, pt(self.sheet.code_indent_pt)))
    }
}

/// Flattens inline nodes into styled strings.
///
/// `code` is applied to code spans; bold applies on top of either style.
pub fn styled_strings(nodes: &[InlineNode], base: Style, code: Style) -> Vec<StyledString> {
    let mut out = Vec::new();
    collect(nodes, base, code, &mut out);
    out
}

fn collect(nodes: &[InlineNode], base: Style, code: Style, out: &mut Vec<StyledString>) {
    for node in nodes {
        match node {
            InlineNode::Text(s) => out.push(StyledString::new(s.as_str(), base)),
            InlineNode::Code(s) => out.push(StyledString::new(s.as_str(), code)),
            InlineNode::Bold(children) => collect(children, base.bold(), code.bold(), out),
        }
    }
}
