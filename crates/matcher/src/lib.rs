//! # simrank Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` ranks a corpus of tokenized documents by similarity to a query
//! and returns the `k` best as `(id, score)` pairs, highest score first. It
//! sits on top of the scoring crates:
//!
//! - `align` for edit-distance and LCS similarity,
//! - `perceptual` for shingle Jaccard similarity,
//!
//! and consumes the tokens produced by `canonical`.
//!
//! ## Core Types
//!
//! - [`Metric`]: `EditDistance`, `Lcs` or `Shingle { k }`.
//! - [`MatchConfig`]: metric, `max_results`, shingle seed and the opt-in
//!   `use_parallel` switch.
//! - [`SimilarityEngine`]: validated config plus scorer; `rank`,
//!   `rank_report` and `rank_documents`.
//! - [`TopKSelector`]: bounded min-heap selection, usable on its own.
//! - [`SimilarityScore`], [`RankedResult`], [`RankReport`]: outputs.
//!
//! ## Ranking rules
//!
//! - A pair with no defined score is left out of the ranking. That is any
//!   document with no tokens, and for shingles a document whose shingle set is
//!   empty while the query's is not (or the reverse).
//! - An empty query yields an empty result without scoring anything.
//! - Equal scores rank the lower identifier first.
//! - Parallel and sequential runs return identical rankings.
//!
//! ## Example Usage
//!
//! ```
//! use canonical::tokenize;
//! use matcher::{rank, Metric};
//!
//! let corpus = vec![
//!     (1u32, tokenize("The quick brown fox jumps over the lazy dog")),
//!     (2, tokenize("A fox fled from danger to safety")),
//!     (3, tokenize("The lazy dog sleeps while the fox jumps")),
//! ];
//! let query = tokenize("A fox fled from danger to safety");
//!
//! let hits = rank(&query, &corpus, 2, Metric::Lcs).unwrap();
//! assert_eq!(hits[0].id, 2);
//! assert_eq!(hits[0].score, 1.0);
//! ```
//!
//! ## Observability
//!
//! Each ranking pass runs inside a `matcher.rank` tracing span and ends with a
//! `rank_success` event carrying `scored`, `skipped`, `returned` and
//! `elapsed_micros`. Rejected configurations log `rank_failure`.

pub mod engine;
pub mod topk;
pub mod types;

pub use crate::engine::{rank, SimilarityEngine};
pub use crate::topk::TopKSelector;
pub use crate::types::{
    MatchConfig, MatchError, Metric, RankReport, RankedResult, SimilarityScore,
};
