//! Paragraph-level types.

use serde::{Deserialize, Serialize};

use super::Token;

/// A contiguous run of tokens within one column, possibly extended by
/// continuation merging.
///
/// Token order is append-only: segmentation appends in input order, and
/// continuation resolution only ever appends a child's tokens at the end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Tokens in reading order
    pub tokens: Vec<Token>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Create a paragraph from a token sequence.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Append a token.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Absorb another paragraph's tokens, appending them in order.
    pub fn absorb(&mut self, child: Paragraph) {
        self.tokens.extend(child.tokens);
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the paragraph has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Line height of the paragraph's last token.
    ///
    /// Used when this paragraph is evaluated as a merge parent. Same-page
    /// matching allows a 0.1 tolerance against the candidate; cross-page
    /// matching requires exact equality, so the value is compared raw
    /// rather than rounded.
    pub fn line_height(&self) -> f32 {
        self.tokens.last().map(Token::line_height).unwrap_or(0.0)
    }

    /// Line height of the paragraph's first token.
    ///
    /// Used when this paragraph is evaluated as a continuation candidate.
    pub fn first_line_height(&self) -> f32 {
        self.tokens.first().map(Token::line_height).unwrap_or(0.0)
    }

    /// Whether this paragraph looks like a continuation fragment: its
    /// first token starts with a lowercase letter.
    pub fn is_continuation_candidate(&self) -> bool {
        self.tokens.first().is_some_and(Token::starts_lowercase)
    }

    /// Whether this paragraph ends mid-sentence: its last token does not
    /// end in terminal punctuation.
    pub fn has_open_ending(&self) -> bool {
        self.tokens.last().is_some_and(|t| !t.ends_sentence())
    }

    /// Get the paragraph text, tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, height: f32) -> Token {
        Token::new(text, 0.0, 10.0, 100.0, 100.0 + height)
    }

    #[test]
    fn test_text_joining() {
        let p = Paragraph::from_tokens(vec![token("hello", 10.0), token("world.", 10.0)]);
        assert_eq!(p.text(), "hello world.");
    }

    #[test]
    fn test_line_heights() {
        let p = Paragraph::from_tokens(vec![token("a", 9.5), token("b", 10.0)]);
        assert!((p.first_line_height() - 9.5).abs() < f32::EPSILON);
        assert!((p.line_height() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_continuation_predicates() {
        let p = Paragraph::from_tokens(vec![token("and", 10.0), token("so", 10.0)]);
        assert!(p.is_continuation_candidate());
        assert!(p.has_open_ending());

        let q = Paragraph::from_tokens(vec![token("Heading", 10.0), token("done.", 10.0)]);
        assert!(!q.is_continuation_candidate());
        assert!(!q.has_open_ending());
    }

    #[test]
    fn test_absorb_appends() {
        let mut parent = Paragraph::from_tokens(vec![token("first", 10.0)]);
        let child = Paragraph::from_tokens(vec![token("second", 10.0), token("third", 10.0)]);
        parent.absorb(child);
        assert_eq!(parent.len(), 3);
        assert_eq!(parent.text(), "first second third");
    }

    #[test]
    fn test_empty_paragraph() {
        let p = Paragraph::new();
        assert!(p.is_empty());
        assert!(!p.is_continuation_candidate());
        assert!(!p.has_open_ending());
        assert_eq!(p.line_height(), 0.0);
    }
}
