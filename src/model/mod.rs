//! Document model types for converted HTML content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! the DOM traversal and the external document serializer. The model is a
//! page → block → run tree carrying fully-resolved formatting.

mod document;
mod numbering;
mod page;
mod paragraph;
mod style;
mod table;

pub use document::DocumentModel;
pub use numbering::{ListIndent, NumberingDefinition, HANGING_INDENT, LEVEL_INDENT};
pub use page::{Block, Page};
pub use paragraph::{BulletMeta, ImageRun, ListBlock, ListFormat, Paragraph, Run, TextRun};
pub use style::{
    Alignment, CaseTransform, Dimension, Indent, Length, LengthUnit, MeasureKind, PageMargins,
    Spacing, Style, TableMeasure,
};
pub use table::{Table, TableCell, TableRow};
