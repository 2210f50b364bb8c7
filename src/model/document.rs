//! Document-level types.

use serde::{Deserialize, Serialize};

use super::Page;

/// An assembled document: pages in document order, each with its resolved
/// paragraph list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Pages in document order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of paragraphs across all pages.
    pub fn paragraph_count(&self) -> usize {
        self.pages.iter().map(Page::paragraph_count).sum()
    }

    /// Total number of tokens across all pages.
    ///
    /// Resolution moves tokens between paragraphs (and across page
    /// boundaries) but never drops or duplicates them, so this always
    /// equals the token count delivered by the source.
    pub fn token_count(&self) -> usize {
        self.pages.iter().map(Page::token_count).sum()
    }

    /// Get plain text content of the entire document, without page markers.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(Page::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
