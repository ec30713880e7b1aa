/// A parsed inline node.
///
/// Nodes own their text: the document is read once and parsed once, so
/// there is no rope to keep spans into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// A code span's raw content, without the backticks.
    Code(String),
    /// A bold span. Children are only ever `Text` or `Code`.
    Bold(Vec<InlineNode>),
}

impl InlineNode {
    /// Concatenated visible text, with every delimiter removed.
    pub fn plain_text(&self) -> String {
        match self {
            InlineNode::Text(s) | InlineNode::Code(s) => s.clone(),
            InlineNode::Bold(children) => children.iter().map(InlineNode::plain_text).collect(),
        }
    }
}
