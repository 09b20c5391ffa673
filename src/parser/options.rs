//! Parsing options and configuration.

use crate::model::PageMargins;

/// Options for converting HTML documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Whether to build pages in parallel
    pub parallel: bool,

    /// Class token that marks an explicit page break
    pub page_break_class: String,

    /// Page margins passed through to the serializer
    pub margins: Option<PageMargins>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel page building.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel page building.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the class token that marks a page break.
    pub fn with_page_break_class(mut self, class: impl Into<String>) -> Self {
        self.page_break_class = class.into();
        self
    }

    /// Set page margins to pass through to the serializer.
    pub fn with_margins(mut self, margins: PageMargins) -> Self {
        self.margins = Some(margins);
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            page_break_class: "page-break".to_string(),
            margins: None,
        }
    }
}
