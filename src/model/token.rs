//! Token-level types.

use serde::{Deserialize, Serialize};

/// A single positioned text unit extracted from a page.
///
/// Coordinates are in page space: `left`/`right` are horizontal edges,
/// `top`/`bottom` vertical edges, with `top < bottom` (y grows downward,
/// as delivered by the external token source). Tokens are immutable once
/// produced; the engine only moves them between containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The literal text content
    pub text: String,

    /// Left edge of the bounding box
    pub left: f32,

    /// Right edge of the bounding box
    pub right: f32,

    /// Top edge of the bounding box
    pub top: f32,

    /// Bottom edge of the bounding box
    pub bottom: f32,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            text: text.into(),
            left,
            right,
            top,
            bottom,
        }
    }

    /// Vertical extent of the bounding box, used as a font-size proxy
    /// when matching continuation fragments to their parent paragraph.
    pub fn line_height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Whether the text begins with a lowercase letter.
    ///
    /// Heuristic proxy for "sentence fragment, not a new paragraph or
    /// heading".
    pub fn starts_lowercase(&self) -> bool {
        self.text.chars().next().is_some_and(|c| c.is_lowercase())
    }

    /// Whether the text ends in terminal punctuation (`.`, `!`, `?`, `"`).
    pub fn ends_sentence(&self) -> bool {
        self.text
            .chars()
            .last()
            .is_some_and(|c| matches!(c, '.' | '!' | '?' | '"'))
    }
}
