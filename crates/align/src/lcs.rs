//! Word-level longest common subsequence.

use crate::rows::{orient, RowPair};

/// Length of the longest subsequence shared by `a` and `b` (order kept,
/// tokens need not be contiguous).
///
/// O(m·n) time, O(min(m, n)) memory, exact string equality. Zero when either
/// side is empty.
pub fn lcs_length<S: AsRef<str>>(a: &[S], b: &[S]) -> usize {
    let (long, short) = orient(a, b);
    let width = short.len();
    if width == 0 {
        return 0;
    }

    let mut rows = RowPair::new(width + 1);
    for long_tok in long {
        let long_tok = long_tok.as_ref();
        for (j, short_tok) in short.iter().enumerate() {
            rows.curr[j + 1] = if long_tok == short_tok.as_ref() {
                rows.prev[j] + 1
            } else {
                rows.prev[j + 1].max(rows.curr[j])
            };
        }
        rows.swap();
    }

    rows.prev[width]
}

/// `lcs / max(m, n)`, or `None` when either sequence is empty.
pub fn lcs_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let longest = a.len().max(b.len());
    Some(lcs_length(a, b) as f64 / longest as f64)
}
