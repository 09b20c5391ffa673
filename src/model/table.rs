//! Table types.

use super::page::Block;
use super::style::Style;
use serde::{Deserialize, Serialize};

/// A table rebuilt cell-by-cell from a table element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Style from the table element's own inline declaration
    pub style: Style,

    /// Body rows in document order
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Style from the row element's own inline declaration
    pub style: Style,

    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(style: Style, cells: Vec<TableCell>) -> Self {
        Self { style, cells }
    }
}

/// A table cell.
///
/// A cell's content is a full block sequence, so paragraphs, lists and
/// further tables nest through cells by recursion. Depth is bounded only by
/// the input's nesting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCell {
    /// Style from the cell element's own inline declaration
    pub style: Style,

    /// Nested block sequence produced by the block builder
    pub content: Vec<Block>,
}

impl TableCell {
    /// Create a new cell.
    pub fn new(style: Style, content: Vec<Block>) -> Self {
        Self { style, content }
    }

    /// Check if the cell holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    #[test]
    fn test_table_counts() {
        let mut table = Table::new();
        assert!(table.is_empty());

        table.add_row(TableRow::new(
            Style::default(),
            vec![
                TableCell::new(
                    Style::default(),
                    vec![Block::Paragraph(Paragraph::with_text("a"))],
                ),
                TableCell::new(
                    Style::default(),
                    vec![Block::Paragraph(Paragraph::with_text("b"))],
                ),
            ],
        ));

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_nested_table_in_cell() {
        let inner = Table::new();
        let cell = TableCell::new(Style::default(), vec![Block::Table(inner)]);
        assert!(!cell.is_empty());
    }
}
