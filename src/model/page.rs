//! Page-level types.

use super::paragraph::{ListBlock, Paragraph};
use super::table::Table;
use serde::{Deserialize, Serialize};

/// A single output page: an ordered block sequence split off at an explicit
/// page-break marker. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Blocks on the page
    pub blocks: Vec<Block>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            blocks: Vec::new(),
        }
    }

    /// Create a page from finished blocks.
    pub fn with_blocks(number: u32, blocks: Vec<Block>) -> Self {
        Self { number, blocks }
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => Some(p.plain_text()),
                Block::List(l) => Some(
                    l.runs
                        .iter()
                        .filter_map(|r| match r {
                            super::paragraph::Run::Text(t) => Some(t.content.as_str()),
                            _ => None,
                        })
                        .collect(),
                ),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the page has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

/// A top-level structural unit of a page.
///
/// Invariant: a non-`Break` block's runs (rows, for tables) are never empty
/// after normalization; empty blocks are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of runs
    Paragraph(Paragraph),

    /// A list block; after normalization, one flattened entry per item
    List(ListBlock),

    /// A table
    Table(Table),

    /// A forced blank paragraph from consecutive break semantics
    Break,
}

impl Block {
    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Block::List(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is a forced break.
    pub fn is_break(&self) -> bool {
        matches!(self, Block::Break)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(1);
        assert_eq!(page.number, 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_block_variants() {
        let b = Block::Paragraph(Paragraph::with_text("x"));
        assert!(b.is_paragraph());
        assert!(!b.is_table());
        assert!(Block::Break.is_break());
    }

    #[test]
    fn test_page_plain_text() {
        let page = Page::with_blocks(
            1,
            vec![
                Block::Paragraph(Paragraph::with_text("one")),
                Block::Break,
                Block::Paragraph(Paragraph::with_text("two")),
            ],
        );
        assert_eq!(page.plain_text(), "one\ntwo");
        assert_eq!(page.block_count(), 3);
    }
}
