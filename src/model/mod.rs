//! Document model types for reconstructed page content.
//!
//! This module defines the value types flowing through the layout engine:
//! positioned tokens in, paragraphs grouped into pages and a document out.
//! Columns are deliberately absent here: they are scratch state owned by
//! the layout module and live only while a single page is processed.

mod document;
mod page;
mod paragraph;
mod token;

pub use document::Document;
pub use page::Page;
pub use paragraph::Paragraph;
pub use token::Token;
