use crate::parsing::inline::parse_inline;

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, Paragraph},
    open::BlockOpen,
    types::Block,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    Fence { lines: Vec<String> },
}

/// Line-driven state machine turning classified lines into [`Block`]s.
///
/// At any line exactly one holds: inside a fence, accumulating a paragraph,
/// or at a block boundary.
pub struct BlockBuilder {
    leaf: LeafState,
    in_list: bool,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            in_list: false,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if c.kind == LineKind::Fence {
            self.toggle_fence();
            return;
        }

        if self.in_fence() {
            self.consume_fence_line(c.raw);
            return;
        }

        match c.kind {
            LineKind::Blank => {
                self.flush_paragraph();
                self.in_list = false;
            }
            LineKind::Open(open) => {
                self.flush_paragraph();
                self.open_leaf(open);
            }
            LineKind::Text => self.extend_paragraph(c.raw),
            LineKind::Fence => {}
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_paragraph();
        if let LeafState::Fence { lines } = &self.leaf {
            log::warn!(
                "unterminated code fence at end of document, dropping {} line(s)",
                lines.len()
            );
        }
        self.out
    }

    /// True right after a list item, until a blank line, heading or rule.
    /// Lists are single-level, so this never changes what gets emitted.
    pub fn in_list(&self) -> bool {
        self.in_list
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn emit(&mut self, block: Block) {
        log::debug!("emit {block}");
        self.out.push(block);
    }

    fn toggle_fence(&mut self) {
        if self.in_fence() {
            if let LeafState::Fence { lines } = std::mem::replace(&mut self.leaf, LeafState::None)
            {
                self.emit(Block::CodeBlock {
                    text: CodeFence::join(&lines),
                });
            }
            return;
        }
        // Opening a fence ends any paragraph so blocks stay in document order.
        self.flush_paragraph();
        self.leaf = LeafState::Fence { lines: vec![] };
    }

    fn consume_fence_line(&mut self, raw: &str) {
        if let LeafState::Fence { lines } = &mut self.leaf {
            lines.push(raw.to_string());
        }
    }

    fn open_leaf(&mut self, open: BlockOpen<'_>) {
        match open {
            BlockOpen::Heading { level, text } => {
                self.emit(Block::Heading {
                    level,
                    text: parse_inline(text),
                });
                self.in_list = false;
            }
            BlockOpen::Bullet { text } => {
                self.emit(Block::BulletItem {
                    text: parse_inline(text),
                });
                self.in_list = true;
            }
            BlockOpen::Numbered { text } => {
                self.emit(Block::NumberedItem {
                    text: parse_inline(text),
                });
                self.in_list = true;
            }
            BlockOpen::Rule => {
                self.emit(Block::Rule);
                self.in_list = false;
            }
        }
    }

    fn extend_paragraph(&mut self, line: &str) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(line.to_string()),
            _ => {
                self.leaf = LeafState::Paragraph {
                    lines: vec![line.to_string()],
                }
            }
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph { lines } = prev {
            self.emit(Block::Paragraph {
                text: parse_inline(&Paragraph::join(&lines)),
            });
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. fence)
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
