use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file and return its content
pub fn read_input(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    log::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Output path used when none is given: the input with its extension
/// replaced by `.pdf` (or `.pdf` appended when it has none).
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}
