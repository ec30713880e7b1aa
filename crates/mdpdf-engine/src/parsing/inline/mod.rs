//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (paragraphs, headings, list item text). Code block
//! bodies never reach it.
//!
//! A single left-to-right scan produces typed nodes:
//! - Code spans suppress all other inline parsing inside them
//! - Bold spans are parsed only outside raw zones, and may contain them
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Code, Bold)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Strong)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//! - **`markup`**: `to_markup()` / `process_inline()` for the backend markup form
//!
//! ## Raw Zone Precedence
//!
//! `` `**not bold**` `` parses as a single code span, not as text containing bold.

pub mod cursor;
pub mod kinds;
pub mod markup;
pub mod parser;
pub mod types;

pub use markup::{escape_xml, process_inline, to_markup};
pub use parser::parse_inline;
pub use types::InlineNode;
