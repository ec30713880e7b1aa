use std::path::Path;

use crate::{
    io::{IoError, read_input},
    parsing::parse_document,
    render::{FontSettings, RenderError, StyleSheet, render_to_file},
};

/// Settings for one conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub fonts: FontSettings,
    pub sheet: StyleSheet,
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Read `input`, parse it and write the rendered PDF to `output`.
///
/// The document title is the first level-1 heading, falling back to the
/// input file stem.
pub fn convert(input: &Path, output: &Path, options: &ConvertOptions) -> Result<(), ConvertError> {
    let source = read_input(input)?;
    let doc = parse_document(&source);

    let title = doc.title().unwrap_or_else(|| {
        input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    log::info!(
        "converting {} ({} block(s)) to {}",
        input.display(),
        doc.blocks.len(),
        output.display()
    );

    render_to_file(&doc, &title, &options.fonts, &options.sheet, output)?;
    Ok(())
}
