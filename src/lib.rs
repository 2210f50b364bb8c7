//! # reflow
//!
//! Reading-order paragraph reconstruction for Rust.
//!
//! Given a flat, unordered stream of positioned text tokens extracted
//! from a multi-column page layout, this library infers which column each
//! token belongs to, where paragraph boundaries fall within a column, and
//! when a seemingly standalone fragment is actually the tail of an
//! earlier paragraph, possibly on the previous page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use reflow::{process_file, render};
//!
//! fn main() -> reflow::Result<()> {
//!     // Process a decoded token file
//!     let doc = process_file("files/REP-2022.tokens.json")?;
//!
//!     // Render to plain text, one paragraph per line
//!     let options = render::RenderOptions::default();
//!     let text = render::to_text(&doc, &options)?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Column classification**: horizontal-gap and x-alignment heuristics
//! - **Paragraph segmentation**: vertical-gap thresholds per column
//! - **Continuation merging**: re-attaches fragments split by column or
//!   page breaks
//! - **Per-source tuning**: cutoff thresholds kept as configuration data
//! - **Parallel processing**: Rayon for per-page classification

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use config::{source_id, CutoffTable, Cutoffs};
pub use error::{Error, Result};
pub use model::{Document, Page, Paragraph, Token};
pub use pipeline::{Pipeline, PipelineOptions};
pub use render::{JsonFormat, RenderOptions};
pub use source::{JsonTokenSource, TokenSource};

use std::path::Path;

/// Process a decoded token file into an assembled document, using default
/// cutoffs.
///
/// # Example
///
/// ```no_run
/// use reflow::process_file;
///
/// let doc = process_file("files/REP-2022.tokens.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn process_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    process_file_with_cutoffs(path, Cutoffs::default())
}

/// Process a decoded token file with source-specific cutoffs.
///
/// # Example
///
/// ```no_run
/// use reflow::{process_file_with_cutoffs, CutoffTable};
///
/// let table = CutoffTable::load("cutoffs.json").unwrap();
/// let cutoffs = table.lookup_path("files/REP-2022.tokens.json");
/// let doc = process_file_with_cutoffs("files/REP-2022.tokens.json", cutoffs).unwrap();
/// ```
pub fn process_file_with_cutoffs<P: AsRef<Path>>(path: P, cutoffs: Cutoffs) -> Result<Document> {
    let mut source = JsonTokenSource::open(path)?;
    let pipeline = Pipeline::with_options(PipelineOptions::new().with_cutoffs(cutoffs));
    pipeline.process(&mut source)
}

/// Process already-materialized token pages.
pub fn process_pages(pages: Vec<Vec<Token>>, cutoffs: Cutoffs) -> Document {
    Pipeline::with_options(PipelineOptions::new().with_cutoffs(cutoffs)).process_pages(pages)
}

/// Extract rendered text from a decoded token file.
///
/// # Example
///
/// ```no_run
/// use reflow::extract_text;
///
/// let text = extract_text("files/REP-2022.tokens.json").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = process_file(path)?;
    render::to_text(&doc, &RenderOptions::default())
}

/// Builder for processing and rendering token documents.
///
/// # Example
///
/// ```no_run
/// use reflow::{Cutoffs, Reflow};
///
/// let text = Reflow::new()
///     .with_cutoffs(Cutoffs::new(10.0, 3.0, 12.0))
///     .sequential()
///     .process("files/REP-2022.tokens.json")?
///     .to_text()?;
/// # Ok::<(), reflow::Error>(())
/// ```
pub struct Reflow {
    pipeline_options: PipelineOptions,
    render_options: RenderOptions,
}

impl Reflow {
    /// Create a new Reflow builder.
    pub fn new() -> Self {
        Self {
            pipeline_options: PipelineOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the layout cutoffs.
    pub fn with_cutoffs(mut self, cutoffs: Cutoffs) -> Self {
        self.pipeline_options = self.pipeline_options.with_cutoffs(cutoffs);
        self
    }

    /// Look up cutoffs for the given path in a table.
    pub fn with_cutoffs_for<P: AsRef<Path>>(mut self, table: &CutoffTable, path: P) -> Self {
        self.pipeline_options = self.pipeline_options.with_cutoffs(table.lookup_path(path));
        self
    }

    /// Enable parallel classification and segmentation.
    pub fn parallel(mut self) -> Self {
        self.pipeline_options = self.pipeline_options.with_parallel(true);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.pipeline_options = self.pipeline_options.sequential();
        self
    }

    /// Enable or disable page-marker lines in text output.
    pub fn with_page_markers(mut self, markers: bool) -> Self {
        self.render_options = self.render_options.with_page_markers(markers);
        self
    }

    /// Process a token file and return a result wrapper.
    pub fn process<P: AsRef<Path>>(self, path: P) -> Result<ReflowResult> {
        let mut source = JsonTokenSource::open(path)?;
        self.process_source(&mut source)
    }

    /// Process any token source.
    pub fn process_source<S: TokenSource>(self, source: &mut S) -> Result<ReflowResult> {
        let pipeline = Pipeline::with_options(self.pipeline_options);
        let document = pipeline.process(source)?;
        Ok(ReflowResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Reflow {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing a token document.
pub struct ReflowResult {
    /// The assembled document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl ReflowResult {
    /// Render to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Render to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
