//! Word-level edit distance.

use crate::rows::{orient, RowPair};

/// Minimum number of single-token insertions, deletions or substitutions
/// turning `a` into `b`, each at unit cost.
///
/// Runs in O(m·n) time and O(min(m, n)) memory. Tokens compare by exact
/// string equality. Total for all inputs: the distance to an empty sequence
/// is the other sequence's length.
pub fn edit_distance<S: AsRef<str>>(a: &[S], b: &[S]) -> usize {
    let (long, short) = orient(a, b);
    let width = short.len();
    if width == 0 {
        return long.len();
    }

    let mut rows = RowPair::new(width + 1);
    for (j, cell) in rows.prev.iter_mut().enumerate() {
        *cell = j;
    }

    for (i, long_tok) in long.iter().enumerate() {
        let long_tok = long_tok.as_ref();
        rows.curr[0] = i + 1;
        for (j, short_tok) in short.iter().enumerate() {
            let cost = usize::from(long_tok != short_tok.as_ref());
            let deletion = rows.prev[j + 1] + 1;
            let insertion = rows.curr[j] + 1;
            let substitution = rows.prev[j] + cost;
            rows.curr[j + 1] = deletion.min(insertion).min(substitution);
        }
        rows.swap();
    }

    rows.prev[width]
}

/// `1 - distance / max(m, n)`, or `None` when either sequence is empty.
pub fn edit_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let longest = a.len().max(b.len());
    Some(1.0 - edit_distance(a, b) as f64 / longest as f64)
}
