//! Rolling two-row buffer shared by the alignment algorithms.

/// Two DP rows of equal width, allocated once per alignment and swapped
/// after each outer iteration.
#[derive(Debug)]
pub(crate) struct RowPair {
    pub(crate) prev: Vec<usize>,
    pub(crate) curr: Vec<usize>,
}

impl RowPair {
    /// Zeroed rows of `width` cells.
    pub(crate) fn new(width: usize) -> Self {
        Self {
            prev: vec![0; width],
            curr: vec![0; width],
        }
    }

    #[inline]
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.prev, &mut self.curr);
    }
}

/// Orders a pair as `(longer, shorter)`.
///
/// The longer sequence drives the outer loop and the shorter one indexes the
/// retained row, whichever argument position each came from. Equal lengths
/// keep the original order.
#[inline]
pub(crate) fn orient<'a, S>(a: &'a [S], b: &'a [S]) -> (&'a [S], &'a [S]) {
    if a.len() >= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}
