use super::kinds::{BulletItem, Heading, NumberedItem, Rule};

/// A block opener recognised on a single line outside a code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    Heading { level: u8, text: &'a str },
    Bullet { text: &'a str },
    /// Carries the whole trimmed line, numeral included.
    Numbered { text: &'a str },
    Rule,
}

/// Detects a block opener on `line`.
///
/// Precedence: heading-3 > heading-2 > heading-1 > bullet > numbered > rule.
/// Headings look at the raw line; the rest look at the trimmed line.
pub fn try_open_leaf(line: &str) -> Option<BlockOpen<'_>> {
    if let Some((level, text)) = Heading::strip_prefix(line) {
        return Some(BlockOpen::Heading { level, text });
    }

    let trimmed = line.trim();
    if let Some(text) = BulletItem::strip_marker(trimmed) {
        return Some(BlockOpen::Bullet { text });
    }
    if NumberedItem::matches(trimmed) {
        return Some(BlockOpen::Numbered { text: trimmed });
    }
    if Rule::matches(trimmed) {
        return Some(BlockOpen::Rule);
    }
    None
}
