//! PDF layout on top of genpdf.
//!
//! The parsed block sequence is mapped one block at a time onto genpdf
//! elements ([`elements`]), using a fixed [`style::StyleSheet`] and A4 page
//! geometry. Font metrics come from TrueType files ([`fonts`]).

use std::path::{Path, PathBuf};

use genpdf::{Document, SimplePageDecorator};

use crate::parsing::ParsedDoc;

pub mod elements;
pub mod fonts;
pub mod rule;
pub mod style;

pub use elements::ElementMapper;
pub use fonts::FontSettings;
pub use style::StyleSheet;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Font directory '{}' not found", .0.display())]
    FontDirMissing(PathBuf),
    #[error("Failed to load font family '{family}' from '{}': {source}", .dir.display())]
    Fonts {
        dir: PathBuf,
        family: String,
        #[source]
        source: genpdf::error::Error,
    },
    #[error("Failed to render PDF: {0}")]
    Pdf(#[from] genpdf::error::Error),
}

/// Lay out `doc` and write it to `output` as a single PDF.
pub fn render_to_file(
    doc: &ParsedDoc,
    title: &str,
    fonts: &FontSettings,
    sheet: &StyleSheet,
    output: &Path,
) -> Result<(), RenderError> {
    let loaded = fonts::load(fonts)?;

    let mut pdf = Document::new(loaded.body);
    let code_family = pdf.add_font_family(loaded.code);
    pdf.set_title(title);
    pdf.set_paper_size(style::PAGE.paper);
    pdf.set_font_size(sheet.body.font_size);
    pdf.set_line_spacing(sheet.line_spacing());

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(style::PAGE.margins());
    pdf.set_page_decorator(decorator);

    let mapper = ElementMapper::new(sheet, code_family);
    for block in &doc.blocks {
        mapper.push_block(&mut pdf, block);
    }

    log::debug!("writing {} block(s) to {}", doc.blocks.len(), output.display());
    pdf.render_to_file(output)?;
    Ok(())
}
