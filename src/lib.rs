//! Workspace umbrella crate for simrank.
//!
//! simrank ranks a corpus of reference documents by similarity to a query
//! document and returns the `k` closest. This crate re-exports the stage
//! crates and stitches tokenization and ranking together so callers can go
//! from raw text to a ranked list with a single call.
//!
//! | stage        | crate        | provides                                      |
//! |--------------|--------------|-----------------------------------------------|
//! | tokenization | `canonical`  | [`tokenize`], [`Document`]                    |
//! | alignment    | `align`      | edit distance and LCS similarity              |
//! | shingles     | `perceptual` | shingle sets and Jaccard similarity           |
//! | ranking      | `matcher`    | [`SimilarityEngine`], [`TopKSelector`]        |
//!
//! ```
//! use simrank::{rank_text, Document, SimrankConfig};
//!
//! let corpus = vec![
//!     Document::new(1u64, "The quick brown fox jumps over the lazy dog"),
//!     Document::new(2, "A fox fled from danger to safety"),
//!     Document::new(3, "The lazy dog sleeps while the fox jumps"),
//! ];
//!
//! let hits = rank_text("This is a test with the quick brown fox running", &corpus, &SimrankConfig::default())?;
//! assert_eq!(hits[0].id, 3);
//! # Ok::<(), simrank::PipelineError>(())
//! ```

pub mod config;

pub use align::{
    AlignmentMode, AlignmentScorer, edit_distance, edit_similarity, lcs_length, lcs_similarity,
};
pub use canonical::{CanonicalError, Document, TokenizeConfig, tokenize, tokenize_with};
pub use matcher::{
    MatchConfig, MatchError, Metric, RankReport, RankedResult, SimilarityEngine, SimilarityScore,
    TopKSelector, rank,
};
pub use perceptual::{
    PerceptualError, ShingleConfig, ShingleHasher, ShingleOverlap, ShingleScorer, ShingleSet,
    Xxh3ShingleHasher,
};

pub use crate::config::{
    ConfigLoadError, CorpusEntry, MatchYamlConfig, SimrankConfig, TokenizerYamlConfig,
};

use std::error::Error;
use std::fmt;
use std::fmt::Debug;

use tracing::debug;

/// Errors that can occur while running text through the ranking pipeline.
#[derive(Debug)]
pub enum PipelineError {
    Canonical(CanonicalError),
    Match(MatchError),
    Config(ConfigLoadError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Canonical(err) => write!(f, "tokenization failure: {err}"),
            PipelineError::Match(err) => write!(f, "ranking failure: {err}"),
            PipelineError::Config(err) => write!(f, "configuration failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Canonical(err) => Some(err),
            PipelineError::Match(err) => Some(err),
            PipelineError::Config(err) => Some(err),
        }
    }
}

impl From<CanonicalError> for PipelineError {
    fn from(value: CanonicalError) -> Self {
        PipelineError::Canonical(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

impl From<PerceptualError> for PipelineError {
    fn from(value: PerceptualError) -> Self {
        PipelineError::Match(MatchError::from(value))
    }
}

impl From<ConfigLoadError> for PipelineError {
    fn from(value: ConfigLoadError) -> Self {
        PipelineError::Config(value)
    }
}

/// Tokenize `query_text` with the configured tokenizer and rank `corpus`
/// against it with the configured matcher.
///
/// The corpus documents keep the tokens they were built with; build them
/// with the same tokenizer settings (see [`SimrankConfig::documents`]) for
/// comparable scores.
pub fn rank_text<I>(
    query_text: &str,
    corpus: &[Document<I>],
    cfg: &SimrankConfig,
) -> Result<RankedResult<I>, PipelineError>
where
    I: Ord + Clone + Sync + Debug,
{
    let query = tokenize_with(query_text, &cfg.tokenize_config())?;
    debug!(query_tokens = query.len(), corpus_len = corpus.len(), "rank_text");
    let engine = SimilarityEngine::new(cfg.match_config()?)?;
    Ok(engine.rank_documents(&query, corpus)?)
}

/// Same as [`rank_text`] but also returns the identifiers of documents that
/// could not be scored.
pub fn rank_text_report<I>(
    query_text: &str,
    corpus: &[Document<I>],
    cfg: &SimrankConfig,
) -> Result<RankReport<I>, PipelineError>
where
    I: Ord + Clone + Sync + Debug,
{
    let query = tokenize_with(query_text, &cfg.tokenize_config())?;
    let engine = SimilarityEngine::new(cfg.match_config()?)?;
    let entries: Vec<(I, &[String])> = corpus
        .iter()
        .map(|doc| (doc.id().clone(), doc.tokens()))
        .collect();
    Ok(engine.rank_report(&query, &entries)?)
}
