//! Common utilities for simrank benchmarks
//!
//! Shared helpers for generating deterministic corpora and query texts.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SAMPLE_QUERY: &str = "the lazy fox jumps over the quick brown dog while rust runs";

const WORDS: [&str; 24] = [
    "the",
    "quick",
    "brown",
    "fox",
    "jumps",
    "over",
    "lazy",
    "dog",
    "rust",
    "programming",
    "language",
    "memory",
    "safety",
    "performance",
    "parallel",
    "search",
    "similarity",
    "hash",
    "document",
    "content",
    "text",
    "while",
    "sleeps",
    "runs",
];

/// Generate `count` token sequences of 8 to `max_len` tokens from a fixed seed.
pub fn generate_corpus(count: usize, max_len: usize, seed: u64) -> Vec<(u64, Vec<String>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count as u64)
        .map(|id| {
            let len = rng.random_range(8..=max_len.max(8));
            let tokens = (0..len)
                .map(|_| WORDS[rng.random_range(0..WORDS.len())].to_string())
                .collect();
            (id, tokens)
        })
        .collect()
}

/// Generate a text of exactly `word_count` words, cycling the vocabulary.
pub fn generate_text_word_count(word_count: usize) -> String {
    let mut words = Vec::with_capacity(word_count);
    for i in 0..word_count {
        words.push(WORDS[i % WORDS.len()]);
    }
    words.join(" ")
}
