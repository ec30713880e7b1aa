/// Horizontal rule block type (`---` alone on a line).
pub struct Rule;

impl Rule {
    pub const MARKER: &'static str = "---";

    pub fn matches(trimmed: &str) -> bool {
        trimmed == Self::MARKER
    }
}
