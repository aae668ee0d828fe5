//! Shingle sets and set overlap.
//!
//! A [`ShingleSet`] holds one hash per overlapping window of `k` tokens.
//! Windows with identical content collapse into one entry, so the set counts
//! distinct shingles, not occurrences. Building a set is O(n·k) over the token
//! count; overlap is O(min(|A|, |B|)).

use fxhash::FxHashSet;

use crate::hasher::ShingleHasher;

/// Set of distinct shingle hashes for one token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShingleSet {
    hashes: FxHashSet<u64>,
}

/// Raw intersection and union sizes of two shingle sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShingleOverlap {
    pub intersection: usize,
    pub union: usize,
}

impl ShingleOverlap {
    /// `intersection / union`, or 0.0 when both sets were empty.
    pub fn jaccard(&self) -> f64 {
        if self.union == 0 {
            0.0
        } else {
            self.intersection as f64 / self.union as f64
        }
    }
}

impl ShingleSet {
    /// Hash every window of `k` consecutive tokens into a set.
    ///
    /// Yields an empty set when `k == 0` or the sequence is shorter than `k`.
    pub fn from_tokens<S, H>(tokens: &[S], k: usize, hasher: &H) -> Self
    where
        S: AsRef<str>,
        H: ShingleHasher,
    {
        let n = tokens.len();
        if k == 0 || n < k {
            return Self::default();
        }
        let mut hashes = FxHashSet::default();
        hashes.reserve(n - k + 1);
        hashes.extend(tokens.windows(k).map(|w| hasher.hash_window(w)));
        Self { hashes }
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn contains(&self, hash: u64) -> bool {
        self.hashes.contains(&hash)
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.hashes.iter().copied()
    }

    /// Intersection and union sizes.
    ///
    /// The smaller set is probed against the larger one's membership test.
    pub fn overlap(&self, other: &ShingleSet) -> ShingleOverlap {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let intersection = small.hashes.iter().filter(|h| large.hashes.contains(*h)).count();
        ShingleOverlap {
            intersection,
            union: self.len() + other.len() - intersection,
        }
    }

    /// Jaccard similarity, defined as 0.0 when both sets are empty.
    pub fn jaccard(&self, other: &ShingleSet) -> f64 {
        self.overlap(other).jaccard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Xxh3ShingleHasher;

    fn hasher() -> Xxh3ShingleHasher {
        Xxh3ShingleHasher::new(42)
    }

    #[test]
    fn empty_tokens_empty_set() {
        let tokens: Vec<&str> = vec![];
        assert!(ShingleSet::from_tokens(&tokens, 3, &hasher()).is_empty());
    }

    #[test]
    fn k_zero_empty_set() {
        let set = ShingleSet::from_tokens(&["a", "b", "c"], 0, &hasher());
        assert!(set.is_empty());
    }

    #[test]
    fn fewer_tokens_than_k_empty_set() {
        let set = ShingleSet::from_tokens(&["a", "b"], 3, &hasher());
        assert!(set.is_empty());
    }

    #[test]
    fn exact_k_single_shingle() {
        let set = ShingleSet::from_tokens(&["a", "b", "c"], 3, &hasher());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn produces_n_minus_k_plus_one_distinct() {
        let tokens = ["a", "b", "c", "d", "e"];
        let set = ShingleSet::from_tokens(&tokens, 3, &hasher());
        assert_eq!(set.len(), tokens.len() - 3 + 1);
    }

    #[test]
    fn repeated_windows_collapse() {
        // "a b" appears three times, "b a" twice.
        let tokens = ["a", "b", "a", "b", "a", "b"];
        let set = ShingleSet::from_tokens(&tokens, 2, &hasher());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn overlap_matches_manual_enumeration() {
        let query = ["quick", "brown", "fox", "over", "lazy", "dog"];
        let doc = [
            "the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog",
        ];
        let a = ShingleSet::from_tokens(&query, 3, &hasher());
        let b = ShingleSet::from_tokens(&doc, 3, &hasher());
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 7);

        // Only "quick brown fox" is shared.
        let overlap = a.overlap(&b);
        assert_eq!(overlap, ShingleOverlap { intersection: 1, union: 10 });
        assert!((overlap.jaccard() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn overlap_independent_of_probe_side() {
        let a = ShingleSet::from_tokens(&["a", "b", "c", "d"], 2, &hasher());
        let b = ShingleSet::from_tokens(&["b", "c", "d", "e", "f", "g"], 2, &hasher());
        assert_eq!(a.overlap(&b), b.overlap(&a));
        assert_eq!(a.jaccard(&b), b.jaccard(&a));
    }

    #[test]
    fn both_empty_jaccard_zero() {
        let a = ShingleSet::default();
        let b = ShingleSet::default();
        assert_eq!(a.overlap(&b), ShingleOverlap { intersection: 0, union: 0 });
        assert_eq!(a.jaccard(&b), 0.0);
    }

    #[test]
    fn identical_sets_jaccard_one() {
        let tokens = ["the", "lazy", "dog", "sleeps"];
        let a = ShingleSet::from_tokens(&tokens, 2, &hasher());
        let b = ShingleSet::from_tokens(&tokens, 2, &hasher());
        assert_eq!(a.jaccard(&b), 1.0);
    }

    #[test]
    fn contains_and_iter_agree() {
        let set = ShingleSet::from_tokens(&["x", "y", "z"], 2, &hasher());
        assert!(set.iter().all(|h| set.contains(h)));
        assert_eq!(set.iter().count(), set.len());
    }
}
