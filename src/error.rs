//! Error types for the reflow library.

use std::io;
use thiserror::Error;

/// Result type alias for reflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout analysis.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The external token source cannot be opened or decoded.
    ///
    /// Fatal for the affected document; the engine never retries.
    #[error("Token source unavailable: {0}")]
    SourceUnavailable(String),

    /// Token data or configuration could not be deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Page number is out of range.
    #[error("Page {0} is out of range (source has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
