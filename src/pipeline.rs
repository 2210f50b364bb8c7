//! Page pipeline and document assembly.
//!
//! Feeds each page's token stream through classification, segmentation,
//! and continuation resolution, carrying the previous page's resolved
//! paragraph list as the single piece of cross-page state.

use rayon::prelude::*;

use crate::config::Cutoffs;
use crate::error::Result;
use crate::layout::{resolve, segment_page};
use crate::model::{Document, Page, Paragraph, Token};
use crate::source::TokenSource;

/// Options controlling pipeline execution.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Layout cutoffs for this document's source
    pub cutoffs: Cutoffs,

    /// Run classification and segmentation for all pages in parallel
    /// before the sequential resolve pass.
    pub parallel: bool,
}

impl PipelineOptions {
    /// Create options with default cutoffs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout cutoffs.
    pub fn with_cutoffs(mut self, cutoffs: Cutoffs) -> Self {
        self.cutoffs = cutoffs;
        self
    }

    /// Enable parallel classification and segmentation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// The document assembler.
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    /// Create a pipeline with default options.
    pub fn new() -> Self {
        Self::with_options(PipelineOptions::default())
    }

    /// Create a pipeline with custom options.
    pub fn with_options(options: PipelineOptions) -> Self {
        Self { options }
    }

    /// Process every page of a token source, in document order, into an
    /// assembled document.
    ///
    /// Classification and segmentation are pure per-page functions and may
    /// run in parallel; resolution always runs as a single sequential pass
    /// because each page's resolver reads (and may mutate) the previous
    /// page's finalized paragraph list.
    pub fn process<S: TokenSource>(&self, source: &mut S) -> Result<Document> {
        let page_count = source.page_count();
        let mut token_pages = Vec::with_capacity(page_count);
        for index in 0..page_count {
            token_pages.push(source.extract_tokens(index)?);
        }
        Ok(self.process_pages(token_pages))
    }

    /// Process already-materialized token pages.
    pub fn process_pages(&self, token_pages: Vec<Vec<Token>>) -> Document {
        let cutoffs = &self.options.cutoffs;

        let unresolved: Vec<Vec<Paragraph>> = if self.options.parallel {
            token_pages
                .into_par_iter()
                .map(|tokens| segment_page(tokens, cutoffs))
                .collect()
        } else {
            token_pages
                .into_iter()
                .map(|tokens| segment_page(tokens, cutoffs))
                .collect()
        };

        let mut document = Document::new();
        for (index, paragraphs) in unresolved.into_iter().enumerate() {
            let number = index as u32 + 1;
            log::info!(
                "Resolving page {} ({} unresolved paragraphs)",
                number,
                paragraphs.len()
            );
            let resolved = match document.pages.last_mut() {
                Some(previous) => resolve(paragraphs, &mut previous.paragraphs),
                None => resolve(paragraphs, &mut []),
            };
            document.add_page(Page::new(number, resolved));
        }
        document
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
