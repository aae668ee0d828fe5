use std::fmt;

use perceptual::{PerceptualError, ShingleConfig, DEFAULT_SEED};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Similarity metric used to score each (query, document) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Metric {
    /// `1 - edit_distance / max(m, n)` over word tokens.
    #[default]
    EditDistance,
    /// `lcs_length / max(m, n)` over word tokens.
    Lcs,
    /// Jaccard similarity of the `k`-token shingle sets.
    Shingle { k: usize },
}

impl Metric {
    /// Stable lowercase name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::EditDistance => "edit_distance",
            Metric::Lcs => "lcs",
            Metric::Shingle { .. } => "shingle",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Shingle { k } => write!(f, "shingle(k={k})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Configuration for a ranking engine.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Configuration schema version.
    pub version: String,
    /// Maximum number of results (`k`). Zero is allowed and yields an empty
    /// ranking.
    #[serde(default = "MatchConfig::default_max_results")]
    pub max_results: usize,
    #[serde(default)]
    pub metric: Metric,
    /// Seed for shingle hashing; ignored by the alignment metrics.
    #[serde(default = "MatchConfig::default_shingle_seed")]
    pub shingle_seed: u64,
    /// Score documents on the rayon pool instead of the calling thread.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_max_results() -> usize {
        10
    }

    pub(crate) fn default_shingle_seed() -> u64 {
        DEFAULT_SEED
    }

    /// Config for `metric` returning at most `max_results` entries.
    pub fn new(metric: Metric, max_results: usize) -> Self {
        Self {
            metric,
            max_results,
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn with_shingle_seed(mut self, seed: u64) -> Self {
        self.shingle_seed = seed;
        self
    }

    /// Shingle settings derived from this config, when the metric uses them.
    pub fn shingle_config(&self) -> Option<ShingleConfig> {
        match self.metric {
            Metric::Shingle { k } => Some(
                ShingleConfig::new()
                    .with_k(k)
                    .with_seed(self.shingle_seed),
            ),
            _ => None,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version.trim().is_empty() {
            return Err(MatchError::InvalidConfig(
                "config.version must not be empty".into(),
            ));
        }
        if let Some(shingle) = self.shingle_config() {
            shingle.validate()?;
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: "v1".to_string(),
            max_results: Self::default_max_results(),
            metric: Metric::default(),
            shingle_seed: Self::default_shingle_seed(),
            use_parallel: false,
        }
    }
}

/// A document identifier paired with its similarity to the query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityScore<I> {
    pub id: I,
    /// Similarity in `[0.0, 1.0]`.
    pub score: f64,
}

impl<I> SimilarityScore<I> {
    pub fn new(id: I, score: f64) -> Self {
        Self { id, score }
    }
}

/// Ranked output, highest score first, at most `max_results` long.
pub type RankedResult<I> = Vec<SimilarityScore<I>>;

/// A ranking together with what happened to the rest of the corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankReport<I> {
    pub results: RankedResult<I>,
    /// Identifiers of documents left unscored because the pair had no
    /// defined score (empty token sequence), in corpus order.
    pub skipped: Vec<I>,
    /// Number of documents that received a score.
    pub scored: usize,
}

impl<I> RankReport<I> {
    pub(crate) fn empty() -> Self {
        Self {
            results: Vec::new(),
            skipped: Vec::new(),
            scored: 0,
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid engine configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Shingle settings rejected by the perceptual layer.
    #[error("perceptual error: {0}")]
    Perceptual(#[from] PerceptualError),
}
