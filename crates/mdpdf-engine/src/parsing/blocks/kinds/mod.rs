//! # Block Kinds
//!
//! Block-specific types that own their syntax markers. The classifier and
//! builder ask these types; they never hardcode `#`, `- ` or backticks.

pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod rule;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::{BulletItem, NumberedItem};
pub use paragraph::Paragraph;
pub use rule::Rule;
