//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Strong`**: `DELIM = b"**"` - bold span, may wrap code spans
//!
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod strong;

pub use code_span::CodeSpan;
pub use strong::Strong;
