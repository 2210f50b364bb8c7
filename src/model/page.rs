//! Page-level types.

use serde::{Deserialize, Serialize};

use super::Paragraph;

/// A single page with its resolved paragraph list.
///
/// A page is immutable once resolved, with one exception: the continuation
/// resolver for the *next* page may append tokens into one of this page's
/// paragraphs when it detects a cross-page continuation. Rendering is
/// therefore deferred until the whole document has been assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Resolved paragraphs in reading order
    pub paragraphs: Vec<Paragraph>,
}

impl Page {
    /// Create a new page.
    pub fn new(number: u32, paragraphs: Vec<Paragraph>) -> Self {
        Self { number, paragraphs }
    }

    /// Check if the page has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get the number of paragraphs on the page.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Total number of tokens across all paragraphs.
    pub fn token_count(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::len).sum()
    }

    /// Get plain text content of the page, one line per paragraph.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Token;

    #[test]
    fn test_page_counts() {
        let page = Page::new(
            1,
            vec![
                Paragraph::from_tokens(vec![
                    Token::new("one", 0.0, 10.0, 0.0, 10.0),
                    Token::new("two", 12.0, 22.0, 0.0, 10.0),
                ]),
                Paragraph::from_tokens(vec![Token::new("three", 0.0, 10.0, 20.0, 30.0)]),
            ],
        );
        assert_eq!(page.paragraph_count(), 2);
        assert_eq!(page.token_count(), 3);
        assert_eq!(page.plain_text(), "one two\nthree");
    }

    #[test]
    fn test_empty_page() {
        let page = Page::new(1, vec![]);
        assert!(page.is_empty());
        assert_eq!(page.plain_text(), "");
    }
}
