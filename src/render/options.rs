//! Rendering options.

/// Options for rendering a document to text.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit a page-marker line before each page's paragraphs
    pub page_markers: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable page-marker lines.
    pub fn with_page_markers(mut self, markers: bool) -> Self {
        self.page_markers = markers;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { page_markers: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.page_markers);
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new().with_page_markers(false);
        assert!(!options.page_markers);
    }
}
