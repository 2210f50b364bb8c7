//! Token source abstraction.
//!
//! The engine never parses binary document structure; an external decoder
//! produces, per page, an ordered token sequence. [`TokenSource`] is the
//! engine-side image of that contract, keeping the concrete decoder out
//! of the layout logic.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Token;

/// Abstract interface to the external token decoder.
///
/// Pages are indexed from 0 and must be drawn in document order by the
/// pipeline; token order within a page is the source's natural extraction
/// (raster) order.
pub trait TokenSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extract the token sequence for a page.
    fn extract_tokens(&mut self, page_index: usize) -> Result<Vec<Token>>;
}

/// In-memory token source, mainly for tests and embedding.
impl TokenSource for Vec<Vec<Token>> {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn extract_tokens(&mut self, page_index: usize) -> Result<Vec<Token>> {
        self.get(page_index)
            .cloned()
            .ok_or(Error::PageOutOfRange(page_index as u32 + 1, self.len() as u32))
    }
}

/// Token source backed by a JSON file: an array of pages, each an array
/// of tokens. This is the handoff format written by the decoding step.
pub struct JsonTokenSource {
    pages: Vec<Vec<Token>>,
}

impl JsonTokenSource {
    /// Open and decode a token file. Failure is fatal for the document.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::SourceUnavailable(format!("{}: {}", path.display(), e)))?;
        let pages: Vec<Vec<Token>> = serde_json::from_str(&data)
            .map_err(|e| Error::SourceUnavailable(format!("{}: {}", path.display(), e)))?;
        log::info!(
            "Loaded token source {} with {} pages",
            path.display(),
            pages.len()
        );
        Ok(Self { pages })
    }

    /// Build a source from already-materialized pages.
    pub fn from_pages(pages: Vec<Vec<Token>>) -> Self {
        Self { pages }
    }
}

impl TokenSource for JsonTokenSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn extract_tokens(&mut self, page_index: usize) -> Result<Vec<Token>> {
        self.pages.get(page_index).cloned().ok_or(Error::PageOutOfRange(
            page_index as u32 + 1,
            self.pages.len() as u32,
        ))
    }
}
