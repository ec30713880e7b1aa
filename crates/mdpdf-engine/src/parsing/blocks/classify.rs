use super::{
    kinds::CodeFence,
    open::{BlockOpen, try_open_leaf},
};

/// What a line looks like in isolation. Variant order is match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opens or closes a code fence, depending on builder state.
    Fence,
    /// Whitespace only.
    Blank,
    /// A heading, list item or rule.
    Open(BlockOpen<'a>),
    /// Anything else: paragraph text.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether the line is actually
/// code (inside a fence) is decided by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The line without its trailing `\r`, otherwise untouched.
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// A trailing `\r` is dropped first so CRLF input classifies like LF input.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let raw = line.strip_suffix('\r').unwrap_or(line);

        let kind = if CodeFence::is_fence(raw) {
            LineKind::Fence
        } else if raw.trim().is_empty() {
            LineKind::Blank
        } else {
            match try_open_leaf(raw) {
                Some(open) => LineKind::Open(open),
                None => LineKind::Text,
            }
        };

        LineClass { raw, kind }
    }
}
