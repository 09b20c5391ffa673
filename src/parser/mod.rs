//! HTML conversion module: DOM traversal into the document model.

mod builder;
mod image;
mod list;
mod options;
mod pages;
mod table;

pub use builder::build_blocks;
pub use image::{decode_data_uri, DecodedImage};
pub use list::{normalize_lists, render_ordinal};
pub use options::ParseOptions;
pub use pages::split_pages;
pub use table::build_table;

use std::path::Path;

use rayon::prelude::*;

use crate::dom::{DomTree, NodeId};
use crate::error::Result;
use crate::model::{
    Alignment, Block, DocumentModel, ListIndent, NumberingDefinition, Page,
};

/// HTML document parser.
///
/// Wraps the flattened DOM and drives the page splitter, the block builder
/// and the list normalizer, then assembles the document model.
pub struct HtmlParser {
    tree: DomTree,
    options: ParseOptions,
}

impl HtmlParser {
    /// Parse an HTML string with default options.
    pub fn new(html: &str) -> Result<Self> {
        Self::with_options(html, ParseOptions::default())
    }

    /// Parse an HTML string with custom options.
    pub fn with_options(html: &str, options: ParseOptions) -> Result<Self> {
        Ok(Self {
            tree: DomTree::parse(html)?,
            options,
        })
    }

    /// Read and parse an HTML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with_options(path, ParseOptions::default())
    }

    /// Read and parse an HTML file with custom options.
    pub fn from_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let html = std::fs::read_to_string(path)?;
        Self::with_options(&html, options)
    }

    /// Convert the document into the page → block → run model.
    ///
    /// Pages share no mutable state, so they are built in parallel unless
    /// the options say otherwise, and joined in original page order. A
    /// failure in one page does not corrupt its siblings; the first error
    /// in page order is reported.
    pub fn parse(&self) -> Result<DocumentModel> {
        let mut model = DocumentModel::new();
        model.margins = self.options.margins;

        let Some(body) = self.tree.body() else {
            return Ok(model);
        };

        let segments = split_pages(&self.tree, body, &self.options.page_break_class);

        let build_page = |nodes: &Vec<NodeId>| -> Result<Vec<Block>> {
            Ok(normalize_lists(build_blocks(&self.tree, nodes)?))
        };

        let built: Vec<Vec<Block>> = if self.options.parallel {
            segments
                .par_iter()
                .map(build_page)
                .collect::<Result<Vec<_>>>()?
        } else {
            segments
                .iter()
                .map(build_page)
                .collect::<Result<Vec<_>>>()?
        };

        for (index, blocks) in built.into_iter().enumerate() {
            model.add_page(Page::with_blocks(index as u32 + 1, blocks));
        }

        model.numbering = assign_numbering(&mut model.pages);

        log::debug!(
            "converted {} page(s), {} numbering definition(s)",
            model.page_count(),
            model.numbering.len()
        );

        Ok(model)
    }
}

/// Walk every list entry in page order, give each its numbering definition
/// and point the entry back at it.
///
/// References are only assigned here, after the parallel join, so page
/// builds never touch shared numbering state.
fn assign_numbering(pages: &mut [Page]) -> Vec<NumberingDefinition> {
    let mut definitions = Vec::new();

    for page in pages {
        for block in &mut page.blocks {
            collect_numbering(block, &mut definitions);
        }
    }

    definitions
}

fn collect_numbering(block: &mut Block, definitions: &mut Vec<NumberingDefinition>) {
    match block {
        Block::List(list) => {
            let ordinal = list.bullet.start.unwrap_or(1);
            let index = definitions.len();
            list.bullet.numbering_ref = Some(index);

            definitions.push(NumberingDefinition {
                reference: format!("list-custom-numbering{}", index),
                level: list.bullet.level,
                text: format!("{}.", render_ordinal(list.bullet.format, ordinal)),
                alignment: Alignment::End,
                run_style: list.style.without_underline(),
                indent: ListIndent::for_level(list.bullet.level),
            });
        }
        Block::Table(table) => {
            for row in &mut table.rows {
                for cell in &mut row.cells {
                    for nested in &mut cell.content {
                        collect_numbering(nested, definitions);
                    }
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListFormat;

    #[test]
    fn test_parse_single_page() {
        let parser = HtmlParser::new("<p>hello</p>").unwrap();
        let model = parser.parse().unwrap();

        assert_eq!(model.page_count(), 1);
        assert_eq!(model.plain_text(), "hello");
    }

    #[test]
    fn test_parse_page_breaks() {
        let html = r#"<p>A</p><div class="page-break"></div><p>B</p><p>C</p>"#;
        let parser = HtmlParser::new(html).unwrap();
        let model = parser.parse().unwrap();

        assert_eq!(model.page_count(), 2);
        assert_eq!(model.get_page(1).unwrap().plain_text(), "A");
        assert_eq!(model.get_page(2).unwrap().plain_text(), "B\nC");
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let html = r#"<p>A</p><div class="page-break"></div><ul><li>x</li></ul>"#;

        let parallel = HtmlParser::new(html).unwrap().parse().unwrap();
        let sequential =
            HtmlParser::with_options(html, ParseOptions::new().sequential())
                .unwrap()
                .parse()
                .unwrap();

        assert_eq!(
            parallel.to_json(false).unwrap(),
            sequential.to_json(false).unwrap()
        );
    }

    #[test]
    fn test_numbering_assignment() {
        let html = r#"<ol start="3"><li>a</li><li>b</li><li>c</li></ol>"#;
        let model = HtmlParser::new(html).unwrap().parse().unwrap();

        assert_eq!(model.numbering.len(), 3);
        assert_eq!(model.numbering[0].reference, "list-custom-numbering0");
        assert_eq!(model.numbering[0].text, "3.");
        assert_eq!(model.numbering[1].text, "4.");
        assert_eq!(model.numbering[2].text, "5.");

        let page = model.get_page(1).unwrap();
        let refs: Vec<usize> = page
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::List(l) => l.bullet.numbering_ref,
                _ => None,
            })
            .collect();
        assert_eq!(refs, [0, 1, 2]);
    }

    #[test]
    fn test_numbering_formats() {
        let html = r#"<ol style="list-style-type: lower-alpha"><li>x</li><li>y</li></ol>"#;
        let model = HtmlParser::new(html).unwrap().parse().unwrap();

        let formats: Vec<ListFormat> = model
            .get_page(1)
            .unwrap()
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::List(l) => Some(l.bullet.format),
                _ => None,
            })
            .collect();
        assert_eq!(formats, [ListFormat::LowerAlpha, ListFormat::LowerAlpha]);
        assert_eq!(model.numbering[0].text, "a.");
        assert_eq!(model.numbering[1].text, "b.");
    }

    #[test]
    fn test_margins_pass_through() {
        let options =
            ParseOptions::new().with_margins(crate::model::PageMargins::new(720, 720, 1080, 1080));
        let model = HtmlParser::with_options("<p>x</p>", options)
            .unwrap()
            .parse()
            .unwrap();

        let margins = model.margins.unwrap();
        assert_eq!(margins.top, 720);
        assert_eq!(margins.left, 1080);
    }
}
