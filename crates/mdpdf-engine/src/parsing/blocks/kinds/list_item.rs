use regex::Regex;
use std::sync::OnceLock;

/// Single-level bullet item (`- text`).
pub struct BulletItem;

impl BulletItem {
    pub const MARKER: &'static str = "- ";

    /// Strips the bullet marker from an already trimmed line.
    pub fn strip_marker(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::MARKER)
    }
}

/// Single-level numbered item (`1. text`). The numeral stays part of the item text.
pub struct NumberedItem;

impl NumberedItem {
    /// Returns true if an already trimmed line starts with `N. `.
    pub fn matches(trimmed: &str) -> bool {
        static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = NUMBERED_REGEX
            .get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid numbered item regex"));
        re.is_match(trimmed)
    }
}
