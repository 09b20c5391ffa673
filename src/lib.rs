//! # docloom
//!
//! HTML to word-processor document model conversion.
//!
//! This library walks a normalized HTML document and produces an
//! intermediate, serialization-ready model: a tree of pages, paragraphs,
//! list items, tables and runs carrying fully-resolved formatting, which an
//! external writer then packages into a binary word-processor file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docloom::parse_str;
//!
//! fn main() -> docloom::Result<()> {
//!     let model = parse_str("<p>Hello <strong>world</strong></p>")?;
//!     println!("{} page(s)", model.page_count());
//!
//!     // Hand the model to a serializer, or inspect it as JSON.
//!     println!("{}", model.to_json(true)?);
//!     Ok(())
//! }
//! ```
//!
//! ## What the conversion does
//!
//! - **Style cascade**: ancestor inline declarations and tag-implied
//!   defaults (`<strong>` → bold) merge down to every text and image run,
//!   own values winning.
//! - **Block boundaries**: paragraphs are decided from inline and block
//!   semantics, including consecutive `<br>` break handling.
//! - **Lists**: nested lists flatten into leveled, numbered entries with a
//!   numbering-definition table for the serializer.
//! - **Tables**: rebuilt cell-by-cell; each cell holds a full nested block
//!   sequence.
//! - **Pages**: the body splits at explicit page-break markers; pages build
//!   in parallel and join in order.

pub mod dom;
pub mod error;
pub mod model;
pub mod parser;
pub mod style;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, BulletMeta, CaseTransform, Dimension, DocumentModel, ImageRun, Indent,
    Length, LengthUnit, ListBlock, ListFormat, ListIndent, MeasureKind, NumberingDefinition, Page,
    PageMargins, Paragraph, Run, Spacing, Style, Table, TableCell, TableMeasure, TableRow, TextRun,
};
pub use parser::{HtmlParser, ParseOptions};

use std::path::Path;

/// Convert an HTML string into a document model.
///
/// # Example
///
/// ```no_run
/// let model = docloom::parse_str("<p>Hello</p>").unwrap();
/// assert_eq!(model.page_count(), 1);
/// ```
pub fn parse_str(html: &str) -> Result<DocumentModel> {
    HtmlParser::new(html)?.parse()
}

/// Convert an HTML string with custom options.
///
/// # Example
///
/// ```no_run
/// use docloom::{parse_str_with_options, ParseOptions};
///
/// let options = ParseOptions::new().sequential();
/// let model = parse_str_with_options("<p>Hello</p>", options).unwrap();
/// ```
pub fn parse_str_with_options(html: &str, options: ParseOptions) -> Result<DocumentModel> {
    HtmlParser::with_options(html, options)?.parse()
}

/// Read and convert an HTML file.
///
/// # Example
///
/// ```no_run
/// let model = docloom::parse_file("input.html").unwrap();
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<DocumentModel> {
    HtmlParser::from_file(path)?.parse()
}

/// Read and convert an HTML file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<DocumentModel> {
    HtmlParser::from_file_with_options(path, options)?.parse()
}

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```no_run
/// use docloom::{Docloom, PageMargins};
///
/// let model = Docloom::new()
///     .with_margins(PageMargins::new(1440, 1440, 1440, 1440))
///     .with_page_break_class("sheet-break")
///     .parse_str("<p>Hello</p>")?;
/// # Ok::<(), docloom::Error>(())
/// ```
pub struct Docloom {
    options: ParseOptions,
}

impl Docloom {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
        }
    }

    /// Disable parallel page building.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set the class token that marks a page break.
    pub fn with_page_break_class(mut self, class: impl Into<String>) -> Self {
        self.options = self.options.with_page_break_class(class);
        self
    }

    /// Set page margins to pass through to the serializer.
    pub fn with_margins(mut self, margins: PageMargins) -> Self {
        self.options = self.options.with_margins(margins);
        self
    }

    /// Convert an HTML string.
    pub fn parse_str(self, html: &str) -> Result<DocumentModel> {
        parse_str_with_options(html, self.options)
    }

    /// Read and convert an HTML file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<DocumentModel> {
        parse_file_with_options(path, self.options)
    }
}

impl Default for Docloom {
    fn default() -> Self {
        Self::new()
    }
}
