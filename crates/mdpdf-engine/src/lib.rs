pub mod convert;
pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use convert::{ConvertError, ConvertOptions, convert};
pub use io::{IoError, default_output_path, read_input};
pub use parsing::{ParsedDoc, parse_document};
pub use render::{FontSettings, RenderError, StyleSheet};
