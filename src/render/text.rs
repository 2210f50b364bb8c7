//! Plain text rendering.
//!
//! The output is the sole interface handed to downstream line-oriented
//! consumers: per page a marker line, then one line per resolved
//! paragraph with tokens joined by single spaces. No further structure is
//! guaranteed beyond "one paragraph per line, in page order".

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for page in &doc.pages {
        if options.page_markers {
            output.push_str(&format!("\n==<Page:{}>==\n\n", page.number));
        }
        for paragraph in &page.paragraphs {
            output.push_str(&paragraph.text());
            output.push('\n');
        }
    }

    Ok(output)
}
