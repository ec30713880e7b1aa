use genpdf::{Margins, PaperSize, style::Color, style::Style};

use crate::parsing::blocks::Block;

/// Millimetres per typographic point.
pub const MM_PER_PT: f64 = 25.4 / 72.0;

pub fn pt(points: f64) -> f64 {
    points * MM_PER_PT
}

/// Fixed page geometry: A4 with a narrow bottom margin.
pub struct PageGeometry {
    pub paper: PaperSize,
    pub top_pt: f64,
    pub right_pt: f64,
    pub bottom_pt: f64,
    pub left_pt: f64,
}

pub const PAGE: PageGeometry = PageGeometry {
    paper: PaperSize::A4,
    top_pt: 72.0,
    right_pt: 72.0,
    bottom_pt: 18.0,
    left_pt: 72.0,
};

impl PageGeometry {
    pub fn margins(&self) -> Margins {
        Margins::trbl(
            pt(self.top_pt),
            pt(self.right_pt),
            pt(self.bottom_pt),
            pt(self.left_pt),
        )
    }
}

/// Font size, colour and vertical spacing for one kind of block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: u8,
    pub color: (u8, u8, u8),
    pub bold: bool,
    pub space_before_pt: f64,
    pub space_after_pt: f64,
}

impl TextStyle {
    const fn plain(font_size: u8) -> Self {
        Self {
            font_size,
            color: (0, 0, 0),
            bold: false,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
        }
    }

    const fn heading(font_size: u8, grey: u8, space_pt: f64) -> Self {
        Self {
            font_size,
            color: (grey, grey, grey),
            bold: true,
            space_before_pt: space_pt,
            space_after_pt: space_pt,
        }
    }

    /// The genpdf style for this text, without a font family.
    pub fn to_style(&self) -> Style {
        let (r, g, b) = self.color;
        let style = Style::new()
            .with_font_size(self.font_size)
            .with_color(Color::Rgb(r, g, b));
        if self.bold { style.bold() } else { style }
    }
}

/// Immutable styles for every block kind. Built once per conversion and
/// shared by reference with the element mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub body: TextStyle,
    /// Body leading in points; genpdf takes it as a multiple of the font size.
    pub leading_pt: f64,
    pub headings: [TextStyle; 3],
    pub code: TextStyle,
    pub code_indent_pt: f64,
    pub paragraph_gap_pt: f64,
    pub code_gap_pt: f64,
    pub rule_gap_pt: f64,
    /// Vertical space taken by a rule; the stroke itself is genpdf's default width.
    pub rule_height_pt: f64,
    pub rule_color: (u8, u8, u8),
    pub bullet: &'static str,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            body: TextStyle::plain(10),
            leading_pt: 14.0,
            headings: [
                TextStyle::heading(16, 0x1a, 12.0),
                TextStyle::heading(14, 0x33, 10.0),
                TextStyle::heading(12, 0x55, 8.0),
            ],
            code: TextStyle::plain(9),
            code_indent_pt: 20.0,
            paragraph_gap_pt: 6.0,
            code_gap_pt: 6.0,
            rule_gap_pt: 12.0,
            rule_height_pt: 1.0,
            rule_color: (0x80, 0x80, 0x80),
            bullet: "\u{2022} ",
        }
    }
}

impl StyleSheet {
    /// Style for a heading level; levels outside 1..=3 clamp to the nearest.
    pub fn heading(&self, level: u8) -> &TextStyle {
        let idx = usize::from(level.clamp(1, 3)) - 1;
        &self.headings[idx]
    }

    pub fn line_spacing(&self) -> f64 {
        self.leading_pt / f64::from(self.body.font_size)
    }

    /// Converts a gap in points into genpdf break lines at body leading.
    pub fn gap_lines(&self, gap_pt: f64) -> f64 {
        gap_pt / self.leading_pt
    }

    /// Layout gap inserted after a block, in points.
    pub fn gap_after(&self, block: &Block) -> Option<f64> {
        match block {
            Block::Paragraph { .. } => Some(self.paragraph_gap_pt),
            Block::CodeBlock { .. } => Some(self.code_gap_pt),
            Block::Rule => Some(self.rule_gap_pt),
            Block::Heading { .. } | Block::BulletItem { .. } | Block::NumberedItem { .. } => None,
        }
    }
}
