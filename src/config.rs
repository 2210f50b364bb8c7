//! Per-source layout cutoffs.
//!
//! The three thresholds driving classification and segmentation are
//! empirically tuned per document source and kept as data, not compiled
//! constants: a table maps a short source identifier (derived from the
//! file name, e.g. an issuer code) to a cutoff triple, with a fallback
//! default for unrecognized sources.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Layout thresholds for one document source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cutoffs {
    /// Horizontal gap at or above which a token is considered to have
    /// jumped out of the current column band.
    pub cutoff_x: f32,

    /// Vertical gap above which a new paragraph starts within a column.
    pub cutoff_y: f32,

    /// Maximum left-edge distance for a token to be considered aligned
    /// with an existing column.
    pub cutoff_col: f32,
}

impl Cutoffs {
    /// Create a cutoff triple.
    pub fn new(cutoff_x: f32, cutoff_y: f32, cutoff_col: f32) -> Self {
        Self {
            cutoff_x,
            cutoff_y,
            cutoff_col,
        }
    }
}

impl Default for Cutoffs {
    fn default() -> Self {
        // Tuned against the annual-report corpus this engine was built for.
        Self::new(14.0, 4.0, 14.0)
    }
}

/// Lookup table from source identifier to cutoffs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CutoffTable {
    entries: HashMap<String, Cutoffs>,
}

impl CutoffTable {
    /// Create an empty table (every lookup falls back to the default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a JSON file mapping identifiers to cutoff triples.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Register cutoffs for a source identifier.
    pub fn insert(&mut self, id: impl Into<String>, cutoffs: Cutoffs) {
        self.entries.insert(id.into(), cutoffs);
    }

    /// Look up cutoffs for a source, falling back to the default triple.
    pub fn lookup(&self, id: &str) -> Cutoffs {
        match self.entries.get(id) {
            Some(c) => *c,
            None => {
                log::debug!("No tuned cutoffs for source '{}', using defaults", id);
                Cutoffs::default()
            }
        }
    }

    /// Look up cutoffs for a file path via [`source_id`].
    pub fn lookup_path<P: AsRef<Path>>(&self, path: P) -> Cutoffs {
        match source_id(&path) {
            Some(id) => self.lookup(&id),
            None => Cutoffs::default(),
        }
    }
}

/// Derive the source identifier from a file name: the file stem's leading
/// segment before the first `-` (e.g. `REP-2022.tokens.json` → `REP`).
pub fn source_id<P: AsRef<Path>>(path: P) -> Option<String> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    let id = stem.split('-').next()?;
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
