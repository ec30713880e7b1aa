pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};

#[derive(Debug, Default)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

impl ParsedDoc {
    /// One line per block, as printed by `mdpdf --print-blocks`.
    pub fn dump(&self) -> String {
        self.blocks
            .iter()
            .map(Block::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Plain text of the first level-1 heading, used as the PDF title.
    pub fn title(&self) -> Option<String> {
        self.blocks.iter().find_map(|b| match b {
            Block::Heading { level: 1, .. } => Some(b.plain_text()),
            _ => None,
        })
    }
}

pub fn parse_document(md: &str) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in md.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}
