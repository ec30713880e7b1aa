/// Fenced code block type with owned delimiter constant.
///
/// The same line both opens and closes a fence; anything after the
/// backticks (an info string such as `rust`) is ignored.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if the line, once trimmed, starts with a backtick fence.
    pub fn is_fence(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }

    /// Joins buffered raw lines into the code block body.
    pub fn join(lines: &[String]) -> String {
        lines.join("\n")
    }
}
