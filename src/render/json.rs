//! JSON rendering for assembled documents.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, Paragraph, Token};

    #[test]
    fn test_to_json_pretty() {
        let mut doc = Document::new();
        doc.add_page(Page::new(
            1,
            vec![Paragraph::from_tokens(vec![Token::new(
                "Hello", 0.0, 30.0, 0.0, 10.0,
            )])],
        ));

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"text\""));
        assert!(json.contains("Hello"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let mut doc = Document::new();
        doc.add_page(Page::new(1, vec![]));

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }
}
