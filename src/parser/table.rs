//! Table-to-grid construction.

use crate::dom::{DomTree, NodeId, Tag};
use crate::error::Result;
use crate::model::{Table, TableCell, TableRow};
use crate::style::declared_style;

use super::builder::build_blocks;
use super::list::normalize_lists;

/// Build a table block from a `table` element.
///
/// Only rows within a body section and only `td` cells within each row are
/// selected; header cells are not specially handled. Each cell's content is
/// a full block sequence produced by the block builder, so paragraphs,
/// lists and further tables nest through cells by recursion. Row and cell
/// styles come from the node's own inline declaration, not the ancestor
/// cascade.
pub fn build_table(tree: &DomTree, table_id: NodeId) -> Result<Table> {
    let mut table = Table {
        style: declared_style(tree, table_id),
        rows: Vec::new(),
    };

    for &section in tree.children(table_id) {
        if tree.tag(section) != Some(Tag::Tbody) {
            continue;
        }

        for &row in tree.children(section) {
            if tree.tag(row) != Some(Tag::Tr) {
                continue;
            }

            let mut cells = Vec::new();
            for &cell in tree.children(row) {
                if tree.tag(cell) != Some(Tag::Td) {
                    continue;
                }

                let content = normalize_lists(build_blocks(tree, tree.children(cell))?);
                cells.push(TableCell::new(declared_style(tree, cell), content));
            }

            table.add_row(TableRow::new(declared_style(tree, row), cells));
        }
    }

    Ok(table)
}
