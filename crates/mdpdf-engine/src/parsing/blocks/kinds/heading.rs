/// ATX heading block type.
///
/// Only levels 1 to 3 are recognised. Prefixes are matched against the
/// untrimmed line, so an indented `# ` is plain paragraph text.
pub struct Heading;

impl Heading {
    /// Heading prefixes, longest first so `### ` never matches as `# `.
    pub const PREFIXES: [(u8, &'static str); 3] = [(3, "### "), (2, "## "), (1, "# ")];

    /// Strips a heading prefix, returning `(level, remainder)`.
    pub fn strip_prefix(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|&(level, prefix)| line.strip_prefix(prefix).map(|rest| (level, rest)))
    }
}
