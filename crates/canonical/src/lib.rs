//! simrank canonical text layer.
//!
//! Turns raw text into the ordered word tokens every similarity metric works
//! over, and wraps text plus tokens into immutable [`Document`] snapshots.
//!
//! ## What we do
//!
//! - Split on whitespace
//! - Keep only alphanumeric characters of each unit (ASCII by default)
//! - Lowercase what is kept
//! - Drop units that end up empty
//! - Optionally keep Unicode letters and apply NFKC first
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text and config give
//! the same tokens on any machine.
//!
//! ```rust
//! use canonical::tokenize;
//!
//! assert_eq!(tokenize("The quick brown fox!"), ["the", "quick", "brown", "fox"]);
//! ```

mod config;
mod document;
mod error;
mod token;

pub use crate::config::TokenizeConfig;
pub use crate::document::Document;
pub use crate::error::CanonicalError;
pub use crate::token::{tokenize, tokenize_with};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_corpus_tokens() {
        let tokens = tokenize("This is a test with the quick brown fox running");
        assert_eq!(tokens.len(), 10);
        assert_eq!(tokens[0], "this");
        assert_eq!(tokens[9], "running");
    }

    #[test]
    fn tokenize_is_deterministic() {
        let texts = ["", "hello world", "Hello, WORLD!", "emoji \u{1f600} mix"];
        for text in texts {
            assert_eq!(tokenize(text), tokenize(text));
        }
    }
}
