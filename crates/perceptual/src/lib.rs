//! # simrank shingle similarity
//!
//! Word-level k‑shingling and Jaccard similarity between token sequences.
//!
//! ## Contract
//!
//! - The shingle layer **only** consumes normalized tokens produced upstream.
//! - It never performs normalization or tokenization.
//! - The API is a pure function of `(tokens, config, hasher)` with no I/O, no
//!   clocks and no global process state.
//!
//! ## Pipeline
//!
//! 1.  **Shingling**: every window of `k` consecutive tokens is hashed into a
//!     64‑bit value with a [`ShingleHasher`] (seeded xxh3 by default).
//! 2.  **Set building**: hashes go into a [`ShingleSet`]; repeated windows
//!     collapse, so only distinct shingles count.
//! 3.  **Scoring**: Jaccard similarity `|A ∩ B| / |A ∪ B|`, probing the smaller
//!     set against the larger one.
//!
//! ## Empty sets
//!
//! A sequence shorter than `k` has no shingles. When **both** sides are empty
//! the score is defined as 0.0. When only **one** side is empty the pair is
//! excluded and [`ShingleScorer::score`] returns `None`.
//!
//! ## Example Usage
//!
//! ```
//! use perceptual::{ShingleConfig, ShingleScorer};
//!
//! let scorer = ShingleScorer::new(ShingleConfig::new().with_k(2)).unwrap();
//! let a = ["the", "lazy", "dog", "sleeps"];
//! let b = ["the", "lazy", "dog", "barks"];
//!
//! // {the lazy, lazy dog, dog sleeps} vs {the lazy, lazy dog, dog barks}
//! let score = scorer.score(&a, &b).unwrap();
//! assert!((score - 0.5).abs() < 1e-12);
//! ```
//!
pub mod config;
mod hasher;
mod shingles;

pub use crate::config::{PerceptualError, ShingleConfig, DEFAULT_SEED};
pub use crate::hasher::{ShingleHasher, Xxh3ShingleHasher};
pub use crate::shingles::{ShingleOverlap, ShingleSet};

/// Scores token sequences by Jaccard similarity of their shingle sets.
#[derive(Debug, Clone)]
pub struct ShingleScorer<H = Xxh3ShingleHasher> {
    k: usize,
    hasher: H,
}

impl ShingleScorer<Xxh3ShingleHasher> {
    /// Build a scorer using the seeded xxh3 hasher from `cfg`.
    pub fn new(cfg: ShingleConfig) -> Result<Self, PerceptualError> {
        let hasher = Xxh3ShingleHasher::new(cfg.seed);
        Self::with_hasher(cfg, hasher)
    }
}

impl<H: ShingleHasher> ShingleScorer<H> {
    /// Build a scorer with a caller-supplied hasher. `cfg.seed` is ignored.
    pub fn with_hasher(cfg: ShingleConfig, hasher: H) -> Result<Self, PerceptualError> {
        cfg.validate()?;
        Ok(Self { k: cfg.k, hasher })
    }

    /// Shingle width.
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Build the shingle set of one token sequence.
    pub fn shingle_set<S: AsRef<str>>(&self, tokens: &[S]) -> ShingleSet {
        ShingleSet::from_tokens(tokens, self.k, &self.hasher)
    }

    /// Raw overlap counts, or `None` when exactly one side has no shingles.
    pub fn overlap<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> Option<ShingleOverlap> {
        let set_a = self.shingle_set(a);
        let set_b = self.shingle_set(b);
        if set_a.is_empty() != set_b.is_empty() {
            return None;
        }
        Some(set_a.overlap(&set_b))
    }

    /// Jaccard similarity of two token sequences.
    ///
    /// Returns `Some(0.0)` when both are shorter than `k` and `None` when only
    /// one of them is.
    pub fn score<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> Option<f64> {
        self.overlap(a, b).map(|o| o.jaccard())
    }

    /// Same policy as [`ShingleScorer::score`] over prebuilt sets, so a query
    /// set can be built once and reused across a whole corpus.
    pub fn score_sets(&self, a: &ShingleSet, b: &ShingleSet) -> Option<f64> {
        if a.is_empty() != b.is_empty() {
            return None;
        }
        Some(a.jaccard(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer(k: usize) -> ShingleScorer {
        ShingleScorer::new(ShingleConfig::new().with_k(k)).unwrap()
    }

    #[test]
    fn invalid_k_rejected() {
        let err = ShingleScorer::new(ShingleConfig::new().with_k(0)).unwrap_err();
        assert_eq!(err, PerceptualError::InvalidConfigK { k: 0 });
    }

    #[test]
    fn identical_sequences_score_one() {
        let tokens = ["a", "fox", "fled", "from", "danger"];
        assert_eq!(scorer(3).score(&tokens, &tokens), Some(1.0));
    }

    #[test]
    fn disjoint_sequences_score_zero() {
        let a = ["a", "b", "c"];
        let b = ["x", "y", "z"];
        assert_eq!(scorer(2).score(&a, &b), Some(0.0));
    }

    #[test]
    fn both_shorter_than_k_scores_zero_not_excluded() {
        let a = ["quick", "fox"];
        let b = ["lazy"];
        assert_eq!(scorer(3).score(&a, &b), Some(0.0));
        assert_eq!(
            scorer(3).overlap(&a, &b),
            Some(ShingleOverlap {
                intersection: 0,
                union: 0
            })
        );
    }

    #[test]
    fn one_side_shorter_than_k_is_excluded() {
        let short = ["quick", "fox"];
        let long = ["the", "quick", "brown", "fox"];
        assert_eq!(scorer(3).score(&short, &long), None);
        assert_eq!(scorer(3).score(&long, &short), None);
    }

    #[test]
    fn score_is_symmetric() {
        let a = ["the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog"];
        let b = ["the", "lazy", "dog", "sleeps", "while", "the", "fox", "jumps"];
        let s = scorer(2);
        assert_eq!(s.score(&a, &b), s.score(&b, &a));
    }

    #[test]
    fn score_sets_matches_score() {
        let a = ["quick", "brown", "fox", "over", "lazy", "dog"];
        let b = ["the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog"];
        let s = scorer(3);
        let via_sets = s.score_sets(&s.shingle_set(&a), &s.shingle_set(&b));
        assert_eq!(via_sets, s.score(&a, &b));
    }

    #[test]
    fn custom_hasher_is_used() {
        // Every window collides, so any two non-empty sets are identical.
        struct Constant;
        impl ShingleHasher for Constant {
            fn hash_window<S: AsRef<str>>(&self, _window: &[S]) -> u64 {
                7
            }
        }
        let s = ShingleScorer::with_hasher(ShingleConfig::new().with_k(2), Constant).unwrap();
        assert_eq!(s.score(&["a", "b"], &["x", "y", "z"]), Some(1.0));
    }
}
