//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts only (fence, blank, block opener, plain text)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` tracks the open leaf
//!    (paragraph buffer or code fence) and emits `Block`s in document order
//!
//! ## Modules
//!
//! - **`types`**: The `Block` enum handed to the renderer
//! - **`kinds`**: Block-specific types with owned markers (CodeFence, Heading, lists, Rule)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Precedence: fence > blank > heading-3 > heading-2 > heading-1 > bullet > numbered > rule > text
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A fence still open at end of input is dropped, not emitted
//! - Lists are single-level; there is no nesting

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use open::BlockOpen;
pub use types::Block;
