//! Document-level types.

use super::numbering::NumberingDefinition;
use super::page::Page;
use super::style::PageMargins;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The serialization-ready document model.
///
/// A page → block → run tree with fully-resolved formatting, plus the
/// numbering-definition table for list entries. An external writer packages
/// this into the final binary document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Pages in document order
    pub pages: Vec<Page>,

    /// Numbering definitions referenced by list entries
    pub numbering: Vec<NumberingDefinition>,

    /// Page margins passed through to the serializer untouched
    pub margins: Option<PageMargins>,
}

impl DocumentModel {
    /// Create a new empty document model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, number: u32) -> Option<&Page> {
        if number == 0 {
            return None;
        }
        self.pages.get((number - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Export the model as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };

        result.map_err(|e| Error::Serialize(format!("JSON serialization error: {}", e)))
    }
}
