use genpdf::{
    Context, Element, Mm, Position, RenderResult, Size,
    error::Error,
    render::Area,
    style::{Color, Style},
};

/// A full-width horizontal line, the rendering of a `---` block.
///
/// genpdf has no rule element of its own, so this draws one line across
/// the available area. genpdf strokes lines at a fixed width; `height` is
/// only the vertical space the rule takes up, with the line at its middle.
pub struct HorizontalRule {
    height: Mm,
    color: Color,
}

impl HorizontalRule {
    pub fn new(height: impl Into<Mm>, color: Color) -> Self {
        Self {
            height: height.into(),
            color,
        }
    }
}

impl Element for HorizontalRule {
    fn render(
        &mut self,
        _context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size();
        if available.height < self.height {
            // Not enough room at the bottom of this page; retry on the next.
            return Ok(RenderResult {
                size: Size::new(0.0, 0.0),
                has_more: true,
            });
        }

        let y = self.height / 2.0;
        area.draw_line(
            vec![Position::new(0.0, y), Position::new(available.width, y)],
            Style::new().with_color(self.color),
        );

        Ok(RenderResult {
            size: Size::new(available.width, self.height),
            has_more: false,
        })
    }
}
