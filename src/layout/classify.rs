//! Column classification.
//!
//! Groups a page's tokens into left-to-right ordered column buckets using
//! horizontal-gap and x-alignment heuristics. The input order is the
//! source's raster order (top-to-bottom, then left-to-right within a
//! visual line); the classifier consumes it sequentially and never
//! re-sorts tokens.

use crate::config::Cutoffs;
use crate::model::Token;

/// A vertical reading lane on a page: an ordered, append-only token
/// sequence sharing horizontal alignment.
///
/// Columns are scratch state: they live only while one page is being
/// processed and are consumed by the segmenter.
#[derive(Debug, Clone, Default)]
pub struct Column {
    /// Tokens in input order
    pub tokens: Vec<Token>,
}

impl Column {
    /// Left edge of the column: the first token's `left`.
    pub fn left(&self) -> f32 {
        self.tokens.first().map(|t| t.left).unwrap_or(0.0)
    }
}

/// Group a page's tokens into columns.
///
/// Single pass over `tokens` in input order, carrying the previous token's
/// right edge and assigned column index:
///
/// * `gap < cutoff_x` with `gap > 0`: normal left-to-right progression,
///   stay in the previous token's column.
/// * `gap <= 0`: a new visual line has started (x reset leftward); match
///   against any existing column whose left edge is within `cutoff_col`,
///   otherwise open a new column at its sorted position.
/// * `gap >= cutoff_x`: a hard horizontal jump; match against columns from
///   the previous index onward, otherwise open a new column.
///
/// The returned columns are sorted ascending by left edge.
pub fn classify(tokens: Vec<Token>, cutoffs: &Cutoffs) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    let mut prev_right = 0.0_f32;
    let mut prev_idx = 0_usize;

    for token in tokens {
        let idx = if columns.is_empty() {
            columns.push(Column::default());
            0
        } else {
            let gap = token.left - prev_right;
            if gap < cutoffs.cutoff_x {
                if gap > 0.0 {
                    prev_idx
                } else {
                    // x reset leftward: the token opens a new visual line
                    match aligned_column(&columns, 0, token.left, cutoffs.cutoff_col) {
                        Some(i) => i,
                        None => open_column(&mut columns, token.left),
                    }
                }
            } else {
                // hard jump, e.g. end of a column band
                match aligned_column(&columns, prev_idx, token.left, cutoffs.cutoff_col) {
                    Some(i) => i,
                    None => open_column(&mut columns, token.left),
                }
            }
        };

        prev_right = token.right;
        prev_idx = idx;
        columns[idx].tokens.push(token);
    }

    columns
}

/// Find the first column at or after `from` whose left edge is within
/// `cutoff_col` of `left`.
fn aligned_column(columns: &[Column], from: usize, left: f32, cutoff_col: f32) -> Option<usize> {
    (from..columns.len()).find(|&i| (left - columns[i].left()).abs() < cutoff_col)
}

/// Insert a new empty column at its sorted position (ascending left edge),
/// shifting later columns, and return its index.
fn open_column(columns: &mut Vec<Column>, left: f32) -> usize {
    let pos = columns
        .iter()
        .position(|c| c.left() > left)
        .unwrap_or(columns.len());
    log::debug!("Opening column {} at x={:.1}", pos, left);
    columns.insert(pos, Column::default());
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, left: f32, right: f32, top: f32) -> Token {
        Token::new(text, left, right, top, top + 10.0)
    }

    #[test]
    fn test_empty_input() {
        let columns = classify(vec![], &Cutoffs::default());
        assert!(columns.is_empty());
    }

    #[test]
    fn test_single_column_flow() {
        let tokens = vec![
            token("a", 0.0, 30.0, 0.0),
            token("b", 35.0, 60.0, 0.0),
            token("c", 0.0, 25.0, 12.0),
        ];
        let columns = classify(tokens, &Cutoffs::default());
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].tokens.len(), 3);
    }

    #[test]
    fn test_two_interleaved_bands() {
        // Raster order alternates between an x band in [0,100] and one in
        // [300,400]; each band must come out as its own column, internally
        // in input order.
        let cutoffs = Cutoffs::new(20.0, 4.0, 5.0);
        let tokens = vec![
            token("l1", 0.0, 80.0, 0.0),
            token("r1", 300.0, 380.0, 0.0),
            token("l2", 1.0, 90.0, 12.0),
            token("r2", 301.0, 390.0, 12.0),
            token("l3", 0.0, 70.0, 24.0),
            token("r3", 300.0, 370.0, 24.0),
        ];
        let columns = classify(tokens, &cutoffs);
        assert_eq!(columns.len(), 2);
        let left: Vec<_> = columns[0].tokens.iter().map(|t| t.text.as_str()).collect();
        let right: Vec<_> = columns[1].tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(left, vec!["l1", "l2", "l3"]);
        assert_eq!(right, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_columns_sorted_by_left_edge() {
        // The middle column is discovered last; it must still end up
        // between the outer two.
        let cutoffs = Cutoffs::new(20.0, 4.0, 5.0);
        let tokens = vec![
            token("a", 0.0, 50.0, 0.0),
            token("c", 400.0, 450.0, 0.0),
            token("b", 200.0, 250.0, 12.0),
            token("a2", 0.0, 40.0, 24.0),
            token("b2", 200.0, 240.0, 24.0),
            token("c2", 400.0, 440.0, 24.0),
        ];
        let columns = classify(tokens, &cutoffs);
        assert_eq!(columns.len(), 3);
        let lefts: Vec<f32> = columns.iter().map(Column::left).collect();
        assert!(lefts.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(columns[1].tokens[0].text, "b");
    }

    #[test]
    fn test_token_conservation() {
        let cutoffs = Cutoffs::new(20.0, 4.0, 5.0);
        let tokens: Vec<Token> = (0..40)
            .map(|i| {
                let band = if i % 2 == 0 { 0.0 } else { 300.0 };
                token("w", band, band + 50.0, (i / 2) as f32 * 12.0)
            })
            .collect();
        let count = tokens.len();
        let columns = classify(tokens, &cutoffs);
        let total: usize = columns.iter().map(|c| c.tokens.len()).sum();
        assert_eq!(total, count);
    }
}
