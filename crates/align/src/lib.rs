//! # simrank alignment similarity
//!
//! Word-level alignment scores between two token sequences:
//!
//! - **Edit distance**: minimum single-token insertions, deletions and
//!   substitutions, normalized to `1 - distance / max(m, n)`.
//! - **LCS**: longest common subsequence length, normalized to
//!   `lcs / max(m, n)`.
//!
//! Both run the classic dynamic program over a rolling pair of rows whose
//! width is the shorter sequence's length plus one, so working memory is
//! O(min(m, n)) regardless of argument order.
//!
//! Scores are `f64` in `[0.0, 1.0]`. A pair where either side is empty has no
//! score (`None`) and is meant to be left out of any ranking, never treated
//! as 0.0 or 1.0.
//!
//! ```
//! use align::{AlignmentMode, AlignmentScorer};
//!
//! let a = ["the", "quick", "brown", "fox"];
//! let b = ["the", "quick", "red", "fox"];
//!
//! let edit = AlignmentScorer::new(AlignmentMode::EditDistance);
//! assert_eq!(edit.score(&a, &b), Some(0.75));
//!
//! let lcs = AlignmentScorer::new(AlignmentMode::Lcs);
//! assert_eq!(lcs.score(&a, &b), Some(0.75));
//! ```

mod edit;
mod lcs;
mod rows;

use serde::{Deserialize, Serialize};

pub use crate::edit::{edit_distance, edit_similarity};
pub use crate::lcs::{lcs_length, lcs_similarity};

/// Which alignment algorithm a scorer runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentMode {
    EditDistance,
    Lcs,
}

/// Alignment-based similarity scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentScorer {
    mode: AlignmentMode,
}

impl AlignmentScorer {
    pub fn new(mode: AlignmentMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    /// Similarity in `[0.0, 1.0]`, or `None` when either side is empty.
    #[inline]
    pub fn score<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> Option<f64> {
        match self.mode {
            AlignmentMode::EditDistance => edit_similarity(a, b),
            AlignmentMode::Lcs => lcs_similarity(a, b),
        }
    }
}
