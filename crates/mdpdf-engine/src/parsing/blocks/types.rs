use std::fmt;

use crate::parsing::inline::{InlineNode, escape_xml, to_markup};

/// A content block, the unit handed to the renderer.
///
/// Layout gaps are not blocks; the renderer decides spacing per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// ATX heading, level 1 to 3.
    Heading { level: u8, text: Vec<InlineNode> },
    Paragraph { text: Vec<InlineNode> },
    /// Raw fenced code; inline markup is never applied.
    CodeBlock { text: String },
    BulletItem { text: Vec<InlineNode> },
    /// Numbered item. The text keeps its `N. ` prefix.
    NumberedItem { text: Vec<InlineNode> },
    Rule,
}

impl Block {
    /// Inline nodes for blocks that carry them.
    pub fn inlines(&self) -> Option<&[InlineNode]> {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::BulletItem { text }
            | Block::NumberedItem { text } => Some(text),
            Block::CodeBlock { .. } | Block::Rule => None,
        }
    }

    /// The block's text in backend markup form.
    pub fn markup(&self) -> String {
        match self {
            Block::CodeBlock { text } => escape_xml(text),
            Block::Rule => String::new(),
            _ => self.inlines().map(to_markup).unwrap_or_default(),
        }
    }

    /// Visible text with all inline delimiters removed.
    pub fn plain_text(&self) -> String {
        match self {
            Block::CodeBlock { text } => text.clone(),
            _ => self
                .inlines()
                .map(|nodes| nodes.iter().map(InlineNode::plain_text).collect())
                .unwrap_or_default(),
        }
    }
}

/// One line per block: `kind: markup`. Code bodies are debug-quoted so
/// embedded newlines stay on the line.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Heading { level, .. } => write!(f, "heading({level}): {}", self.markup()),
            Block::Paragraph { .. } => write!(f, "paragraph: {}", self.markup()),
            Block::CodeBlock { text } => write!(f, "code: {text:?}"),
            Block::BulletItem { .. } => write!(f, "bullet: {}", self.markup()),
            Block::NumberedItem { .. } => write!(f, "numbered: {}", self.markup()),
            Block::Rule => f.write_str("rule"),
        }
    }
}
