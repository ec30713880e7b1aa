/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches. Buffered lines are joined with a
/// single space before inline parsing.
pub struct Paragraph;

impl Paragraph {
    pub const JOINER: &'static str = " ";

    pub fn join(lines: &[String]) -> String {
        lines.join(Self::JOINER)
    }
}
