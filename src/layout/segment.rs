//! Paragraph segmentation within a column.

use crate::model::{Paragraph, Token};

use super::classify::Column;

/// Split a column's tokens into paragraphs at vertical gaps.
///
/// A new paragraph starts whenever the gap between a token's top edge and
/// the previous token's bottom edge exceeds `cutoff_y`. The first token
/// always starts the first paragraph.
pub fn segment(column: Column, cutoff_y: f32) -> Vec<Paragraph> {
    let mut paragraphs: Vec<Paragraph> = Vec::new();

    for token in column.tokens {
        match paragraphs.last_mut() {
            Some(current) if !starts_new_paragraph(current, &token, cutoff_y) => {
                current.push(token);
            }
            _ => {
                let mut p = Paragraph::new();
                p.push(token);
                paragraphs.push(p);
            }
        }
    }

    paragraphs
}

fn starts_new_paragraph(current: &Paragraph, token: &Token, cutoff_y: f32) -> bool {
    match current.tokens.last() {
        Some(prev) => token.top - prev.bottom > cutoff_y,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(gaps: &[f32]) -> Column {
        // Builds a vertical run of 10pt-tall tokens with the given gaps
        // between consecutive tokens.
        let mut tokens = Vec::new();
        let mut top = 0.0;
        tokens.push(Token::new("t0", 0.0, 50.0, top, top + 10.0));
        for (i, gap) in gaps.iter().enumerate() {
            top += 10.0 + gap;
            tokens.push(Token::new(format!("t{}", i + 1), 0.0, 50.0, top, top + 10.0));
        }
        Column { tokens }
    }

    #[test]
    fn test_empty_column() {
        let paragraphs = segment(Column::default(), 4.0);
        assert!(paragraphs.is_empty());
    }

    #[test]
    fn test_no_split_within_cutoff() {
        let paragraphs = segment(column(&[2.0, 3.0, 4.0]), 4.0);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].len(), 4);
    }

    #[test]
    fn test_split_at_single_large_gap() {
        // Gaps of at most 4 except one gap of 6 -> exactly two paragraphs,
        // split at that gap.
        let paragraphs = segment(column(&[2.0, 6.0, 3.0, 2.0]), 4.0);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].len(), 2);
        assert_eq!(paragraphs[1].len(), 3);
        assert_eq!(paragraphs[1].tokens[0].text, "t2");
    }

    #[test]
    fn test_order_preserved() {
        let paragraphs = segment(column(&[1.0, 8.0, 1.0, 8.0, 1.0]), 4.0);
        let texts: Vec<_> = paragraphs
            .iter()
            .flat_map(|p| p.tokens.iter().map(|t| t.text.as_str()))
            .collect();
        assert_eq!(texts, vec!["t0", "t1", "t2", "t3", "t4", "t5"]);
    }
}
