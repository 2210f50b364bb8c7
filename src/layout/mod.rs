//! Layout analysis: column classification, paragraph segmentation, and
//! continuation resolution.
//!
//! The three stages are pure functions over one page's data, except that
//! continuation resolution may also append tokens into the previous
//! page's paragraphs, which is why pages must be resolved in strict
//! document order (see [`crate::pipeline`]).

mod classify;
mod resolve;
mod segment;

pub use classify::{classify, Column};
pub use resolve::resolve;
pub use segment::segment;

use crate::config::Cutoffs;
use crate::model::{Paragraph, Token};

/// Classify a page's tokens into columns and segment each column into
/// paragraphs, concatenated in column order.
///
/// This is the unresolved paragraph list for a page: a pure function of
/// the token list, safe to precompute for many pages in parallel before
/// the sequential resolve pass.
pub fn segment_page(tokens: Vec<Token>, cutoffs: &Cutoffs) -> Vec<Paragraph> {
    let columns = classify(tokens, cutoffs);
    log::debug!("Classified {} columns", columns.len());
    columns
        .into_iter()
        .flat_map(|column| segment(column, cutoffs.cutoff_y))
        .collect()
}
