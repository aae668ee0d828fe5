//! Shingle hashing.
//!
//! A [`ShingleHasher`] maps one window of `k` tokens to a 64-bit value. The
//! hasher is passed explicitly to the scorer; there is no process-wide hashing
//! state, so results depend only on the hasher's own parameters.

use xxhash_rust::xxh3::Xxh3;

/// Hashes a contiguous window of tokens into a fixed-width value.
///
/// Implementations must be pure: the same window always hashes to the same
/// value for the lifetime of the hasher. Collisions between different windows
/// are tolerated and simply count as equal shingles.
pub trait ShingleHasher {
    fn hash_window<S: AsRef<str>>(&self, window: &[S]) -> u64;
}

/// Seeded xxh3 hasher over length-prefixed tokens.
///
/// Each token is fed as `len (u64 little endian) || bytes`, which keeps the
/// encoding of a window unambiguous whatever the tokens contain:
/// `["ab", "c"]` and `["a", "bc"]` never share an input byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xxh3ShingleHasher {
    seed: u64,
}

impl Xxh3ShingleHasher {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ShingleHasher for Xxh3ShingleHasher {
    #[inline]
    fn hash_window<S: AsRef<str>>(&self, window: &[S]) -> u64 {
        let mut state = Xxh3::with_seed(self.seed);
        for token in window {
            let bytes = token.as_ref().as_bytes();
            state.update(&(bytes.len() as u64).to_le_bytes());
            state.update(bytes);
        }
        state.digest()
    }
}
