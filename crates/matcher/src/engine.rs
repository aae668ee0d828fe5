use std::fmt::Debug;
use std::time::Instant;

use align::{AlignmentMode, AlignmentScorer};
use canonical::Document;
use perceptual::{ShingleConfig, ShingleScorer, ShingleSet};
use rayon::prelude::*;
use tracing::{debug, info, warn, Level};

use crate::topk::TopKSelector;
use crate::types::{MatchConfig, MatchError, Metric, RankReport, RankedResult};


#[derive(Debug, Clone)]
enum Scorer {
    Alignment(AlignmentScorer),
    Shingle(ShingleScorer),
}

/// Query-side state built once per ranking pass.
enum QueryScorer<'a, S> {
    Alignment {
        scorer: AlignmentScorer,
        query: &'a [S],
    },
    Shingle {
        scorer: &'a ShingleScorer,
        query: ShingleSet,
    },
}

impl<S: AsRef<str>> QueryScorer<'_, S> {
    /// `None` when the pair has no defined score. A candidate without tokens
    /// never gets one, whatever the metric.
    fn score(&self, candidate: &[S]) -> Option<f64> {
        if candidate.is_empty() {
            return None;
        }
        match self {
            QueryScorer::Alignment { scorer, query } => scorer.score(query, candidate),
            QueryScorer::Shingle { scorer, query } => {
                scorer.score_sets(query, &scorer.shingle_set(candidate))
            }
        }
    }
}

/// Ranks a corpus of token sequences against a query with one metric.
///
/// The engine holds only validated configuration; every call is independent
/// and the same inputs always produce the same ranking, sequential or
/// parallel.
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    cfg: MatchConfig,
    scorer: Scorer,
}

impl SimilarityEngine {
    /// Validate `cfg` and build the scorer it selects.
    pub fn new(cfg: MatchConfig) -> Result<Self, MatchError> {
        match Self::build(cfg) {
            Ok(engine) => Ok(engine),
            Err(err) => {
                warn!(error = %err, "rank_failure");
                Err(err)
            }
        }
    }

    fn build(cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        let scorer = match cfg.metric {
            Metric::EditDistance => {
                Scorer::Alignment(AlignmentScorer::new(AlignmentMode::EditDistance))
            }
            Metric::Lcs => Scorer::Alignment(AlignmentScorer::new(AlignmentMode::Lcs)),
            Metric::Shingle { k } => Scorer::Shingle(ShingleScorer::new(
                ShingleConfig::new().with_k(k).with_seed(cfg.shingle_seed),
            )?),
        };
        Ok(Self { cfg, scorer })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    pub fn metric(&self) -> Metric {
        self.cfg.metric
    }

    /// Top `max_results` corpus entries by similarity to `query`, highest
    /// first. Entries without a defined score are left out.
    pub fn rank<I, S, T>(&self, query: &[S], corpus: &[(I, T)]) -> Result<RankedResult<I>, MatchError>
    where
        I: Ord + Clone + Sync + Debug,
        S: AsRef<str> + Sync,
        T: AsRef<[S]>,
    {
        Ok(self.rank_report(query, corpus)?.results)
    }

    /// Like [`SimilarityEngine::rank`], also reporting skipped identifiers
    /// and how many entries were scored.
    pub fn rank_report<I, S, T>(
        &self,
        query: &[S],
        corpus: &[(I, T)],
    ) -> Result<RankReport<I>, MatchError>
    where
        I: Ord + Clone + Sync + Debug,
        S: AsRef<str> + Sync,
        T: AsRef<[S]>,
    {
        let entries: Vec<(&I, &[S])> = corpus
            .iter()
            .map(|(id, tokens)| (id, tokens.as_ref()))
            .collect();
        Ok(self.rank_entries(query, &entries))
    }

    /// Rank tokenized documents against already tokenized query text.
    pub fn rank_documents<I>(
        &self,
        query: &[String],
        documents: &[Document<I>],
    ) -> Result<RankedResult<I>, MatchError>
    where
        I: Ord + Clone + Sync + Debug,
    {
        let entries: Vec<(&I, &[String])> = documents.iter().map(Document::as_entry).collect();
        Ok(self.rank_entries(query, &entries).results)
    }

    fn query_scorer<'a, S: AsRef<str>>(&'a self, query: &'a [S]) -> QueryScorer<'a, S> {
        match &self.scorer {
            Scorer::Alignment(scorer) => QueryScorer::Alignment {
                scorer: *scorer,
                query,
            },
            Scorer::Shingle(scorer) => QueryScorer::Shingle {
                scorer,
                query: scorer.shingle_set(query),
            },
        }
    }

    fn rank_entries<I, S>(&self, query: &[S], entries: &[(&I, &[S])]) -> RankReport<I>
    where
        I: Ord + Clone + Sync + Debug,
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "matcher.rank",
            metric = %self.cfg.metric,
            max_results = self.cfg.max_results,
            corpus_len = entries.len(),
            parallel = self.cfg.use_parallel
        );
        let _guard = span.enter();

        if query.is_empty() {
            debug!("empty query, corpus not scored");
            let elapsed_micros = start.elapsed().as_micros();
            info!(scored = 0, skipped = 0, returned = 0, elapsed_micros, "rank_success");
            return RankReport::empty();
        }

        let scorer = self.query_scorer(query);
        let mut selector = TopKSelector::with_expected(self.cfg.max_results, entries.len());
        let mut skipped = Vec::new();
        let mut scored = 0usize;

        let mut route = |id: &I, score: Option<f64>| match score {
            Some(score) => {
                scored += 1;
                selector.push(id.clone(), score);
            }
            None => {
                debug!(doc_id = ?id, "document excluded, empty token sequence");
                skipped.push(id.clone());
            }
        };

        if self.cfg.use_parallel {
            // Scores are collected in corpus order, then routed on this thread.
            let scores: Vec<Option<f64>> = entries
                .par_iter()
                .map(|(_, tokens)| scorer.score(tokens))
                .collect();
            for (&(id, _), score) in entries.iter().zip(scores) {
                route(id, score);
            }
        } else {
            for &(id, tokens) in entries {
                route(id, scorer.score(tokens));
            }
        }

        let results = selector.into_sorted_vec();
        let elapsed_micros = start.elapsed().as_micros();
        info!(
            scored,
            skipped = skipped.len(),
            returned = results.len(),
            elapsed_micros,
            "rank_success"
        );

        RankReport {
            results,
            skipped,
            scored,
        }
    }
}

/// One-shot ranking: the `k` corpus entries most similar to `query` under
/// `metric`, highest first.
///
/// Shingle metrics use the default hash seed. Fails only when the metric's
/// parameters are invalid, before anything is scored.
pub fn rank<I, S, T>(
    query: &[S],
    corpus: &[(I, T)],
    k: usize,
    metric: Metric,
) -> Result<RankedResult<I>, MatchError>
where
    I: Ord + Clone + Sync + Debug,
    S: AsRef<str> + Sync,
    T: AsRef<[S]>,
{
    SimilarityEngine::new(MatchConfig::new(metric, k))?.rank(query, corpus)
}
