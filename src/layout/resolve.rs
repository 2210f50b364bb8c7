//! Continuation resolution.
//!
//! A paragraph that starts with a lowercase letter is usually not a real
//! paragraph but the tail of one that was cut by a column or page break.
//! The resolver re-attaches such fragments to their parent: first among
//! earlier paragraphs on the same page, then on the previous page.
//!
//! The two searches are deliberately asymmetric. Same-page comparisons
//! have spatial proximity as a secondary signal, so the line-height match
//! allows a small tolerance; cross-page comparisons have nothing but font
//! metrics, so the line heights must match exactly.

use crate::model::Paragraph;

/// Minimum parent length in tokens. Short paragraphs (headings, captions,
/// table cells) make unreliable parents.
const MIN_PARENT_TOKENS: usize = 10;

/// Line-height tolerance for same-page parent matching.
const SAME_PAGE_TOLERANCE: f32 = 0.1;

/// Merge continuation fragments in `current` into their parents.
///
/// Candidates are visited in the order the paragraphs were produced. A
/// same-page parent is searched first among preceding paragraphs in
/// reverse order; failing that, the previous page's paragraphs are
/// searched in reverse with the strict equality rule, mutating `previous`
/// in place (which is why rendering is deferred until all pages have been
/// resolved). A fragment with no qualifying parent is kept standalone.
///
/// Every merge removes the child from `current`, so a paragraph gains at
/// most one parent and re-running the resolver on its output is a no-op.
pub fn resolve(mut current: Vec<Paragraph>, previous: &mut [Paragraph]) -> Vec<Paragraph> {
    let mut i = 0;
    while i < current.len() {
        if !current[i].is_continuation_candidate() {
            i += 1;
            continue;
        }
        let height = current[i].first_line_height();

        if let Some(j) = find_parent(&current[..i], |parent| {
            (parent.line_height() - height).abs() < SAME_PAGE_TOLERANCE
        }) {
            let child = current.remove(i);
            log::debug!(
                "Merging fragment \"{}…\" into same-page paragraph {}",
                first_word(&child),
                j
            );
            current[j].absorb(child);
            continue;
        }

        if let Some(j) = find_parent(previous, |parent| parent.line_height() == height) {
            let child = current.remove(i);
            log::debug!(
                "Merging fragment \"{}…\" into previous-page paragraph {}",
                first_word(&child),
                j
            );
            previous[j].absorb(child);
            continue;
        }

        log::debug!(
            "No parent found for fragment starting with \"{}\"",
            first_word(&current[i])
        );
        i += 1;
    }
    current
}

/// Search `paragraphs` in reverse for one that qualifies as a parent:
/// long enough, still mid-sentence, and passing the caller's line-height
/// rule.
fn find_parent<F>(paragraphs: &[Paragraph], height_matches: F) -> Option<usize>
where
    F: Fn(&Paragraph) -> bool,
{
    (0..paragraphs.len()).rev().find(|&j| {
        let parent = &paragraphs[j];
        parent.len() > MIN_PARENT_TOKENS && parent.has_open_ending() && height_matches(parent)
    })
}

fn first_word(p: &Paragraph) -> &str {
    p.tokens.first().map(|t| t.text.as_str()).unwrap_or("")
}
