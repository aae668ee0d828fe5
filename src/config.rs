//! YAML configuration file support for simrank.
//!
//! A single YAML file describes the tokenizer, the matcher and, optionally, a
//! corpus and query for the `simrank` binary. Every section has defaults, so
//! an empty document apart from `version` is a valid configuration.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # simrank configuration
//! version: "1.0"
//! name: "news dedup"
//!
//! tokenizer:
//!   version: 1
//!   unicode: false
//!   normalize_unicode: false
//!
//! matcher:
//!   version: 1
//!   metric: "shingle"
//!   shingle_k: 3
//!   max_results: 5
//!   seed: 42
//!   use_parallel: false
//!
//! query: "A fox fled from danger to safety"
//! corpus:
//!   - id: 1
//!     text: "The quick brown fox jumps over the lazy dog"
//!   - id: 2
//!     text: "A fox fled from danger to safety"
//! ```

use std::fs;
use std::path::Path;

use canonical::{CanonicalError, Document, TokenizeConfig};
use matcher::{MatchConfig, Metric};
use perceptual::DEFAULT_SEED;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct SimrankConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub tokenizer: TokenizerYamlConfig,

    #[serde(default)]
    pub matcher: MatchYamlConfig,

    /// Query text ranked by the binary; the built-in sample query is used
    /// when absent.
    #[serde(default)]
    pub query: Option<String>,

    /// Reference documents ranked by the binary; the built-in sample corpus
    /// is used when empty.
    #[serde(default)]
    pub corpus: Vec<CorpusEntry>,
}

impl SimrankConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SimrankConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.tokenizer.validate()?;
        self.matcher.validate()?;

        let mut ids: Vec<u64> = self.corpus.iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ConfigLoadError::Validation(format!(
                "corpus id {} appears more than once",
                pair[0]
            )));
        }

        Ok(())
    }

    /// Tokenizer settings for the canonical stage.
    pub fn tokenize_config(&self) -> TokenizeConfig {
        self.tokenizer.to_tokenize_config()
    }

    /// Engine settings for the matcher stage.
    pub fn match_config(&self) -> Result<MatchConfig, ConfigLoadError> {
        self.matcher.to_match_config()
    }

    /// Tokenize the configured corpus into documents.
    pub fn documents(&self) -> Result<Vec<Document<u64>>, CanonicalError> {
        let cfg = self.tokenize_config();
        self.corpus
            .iter()
            .map(|entry| Document::with_config(entry.id, entry.text.as_str(), &cfg))
            .collect()
    }
}

impl Default for SimrankConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            tokenizer: TokenizerYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
            query: None,
            corpus: Vec::new(),
        }
    }
}

/// One reference document in a YAML corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusEntry {
    pub id: u64,
    pub text: String,
}

/// Tokenizer YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizerYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub unicode: bool,

    #[serde(default)]
    pub normalize_unicode: bool,
}

impl TokenizerYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_tokenize_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("tokenizer: {err}")))
    }

    fn to_tokenize_config(&self) -> TokenizeConfig {
        TokenizeConfig {
            version: self.version,
            unicode: self.unicode,
            normalize_unicode: self.normalize_unicode,
        }
    }
}

impl Default for TokenizerYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            unicode: false,
            normalize_unicode: false,
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    /// One of `edit_distance`, `lcs` or `shingle`.
    #[serde(default = "default_metric")]
    pub metric: String,

    /// Shingle width, read only when `metric` is `shingle`.
    #[serde(default = "default_shingle_k")]
    pub shingle_k: usize,

    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "matcher.version must be >= 1".to_string(),
            ));
        }
        self.to_match_config()?
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))
    }

    fn metric(&self) -> Result<Metric, ConfigLoadError> {
        match self.metric.as_str() {
            "edit_distance" | "edit" | "levenshtein" => Ok(Metric::EditDistance),
            "lcs" => Ok(Metric::Lcs),
            "shingle" | "jaccard" => Ok(Metric::Shingle { k: self.shingle_k }),
            other => Err(ConfigLoadError::Validation(format!(
                "matcher.metric must be one of edit_distance, lcs, shingle (got {other:?})"
            ))),
        }
    }

    fn to_match_config(&self) -> Result<MatchConfig, ConfigLoadError> {
        Ok(MatchConfig {
            version: format!("v{}", self.version),
            max_results: self.max_results,
            metric: self.metric()?,
            shingle_seed: self.seed,
            use_parallel: self.use_parallel,
        })
    }
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            metric: default_metric(),
            shingle_k: default_shingle_k(),
            max_results: default_max_results(),
            seed: default_seed(),
            use_parallel: false,
        }
    }
}

fn default_version() -> u32 {
    1
}
fn default_metric() -> String {
    "edit_distance".to_string()
}
fn default_shingle_k() -> usize {
    3
}
fn default_max_results() -> usize {
    10
}
fn default_seed() -> u64 {
    DEFAULT_SEED
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
matcher:
  metric: "lcs"
  max_results: 2
"#;

        let config = SimrankConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.tokenizer, TokenizerYamlConfig::default());
        let match_cfg = config.match_config().unwrap();
        assert_eq!(match_cfg.metric, Metric::Lcs);
        assert_eq!(match_cfg.max_results, 2);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
corpus:
  - id: 7
    text: "The lazy dog"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = SimrankConfig::from_file(temp_file.path()).unwrap();
        let docs = config.documents().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(*docs[0].id(), 7);
        assert_eq!(docs[0].tokens(), ["the", "lazy", "dog"]);
    }

    #[test]
    fn test_missing_file() {
        let err = SimrankConfig::from_file("/nonexistent/simrank.yaml").unwrap_err();
        assert!(matches!(err, ConfigLoadError::FileRead(_)));
    }

    #[test]
    fn test_default_config() {
        let config = SimrankConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.match_config().unwrap(), MatchConfig::default());
        assert_eq!(config.tokenize_config(), TokenizeConfig::default());
    }

    #[test]
    fn test_unsupported_version() {
        let err = SimrankConfig::from_yaml("version: \"2.0\"\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedVersion(v) if v == "2.0"));
    }

    #[test]
    fn test_shingle_width_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  metric: "shingle"
  shingle_k: 0
"#;

        let result = SimrankConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("k must be >= 1"));
    }

    #[test]
    fn test_shingle_width_ignored_for_alignment_metrics() {
        let yaml = r#"
version: "1.0"
matcher:
  metric: "edit_distance"
  shingle_k: 0
"#;

        assert!(SimrankConfig::from_yaml(yaml).is_ok());
    }

    #[test]
    fn test_unknown_metric() {
        let yaml = r#"
version: "1.0"
matcher:
  metric: "cosine"
"#;

        let err = SimrankConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("matcher.metric"));
    }

    #[test]
    fn test_negative_max_results_fails_to_parse() {
        let yaml = r#"
version: "1.0"
matcher:
  max_results: -1
"#;

        let err = SimrankConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigLoadError::YamlParse(_)));
    }

    #[test]
    fn test_zero_versions_rejected() {
        let tokenizer = "version: \"1.0\"\ntokenizer:\n  version: 0\n";
        assert!(SimrankConfig::from_yaml(tokenizer)
            .unwrap_err()
            .to_string()
            .contains("tokenizer"));

        let matcher = "version: \"1.0\"\nmatcher:\n  version: 0\n";
        assert!(SimrankConfig::from_yaml(matcher)
            .unwrap_err()
            .to_string()
            .contains("matcher.version"));
    }

    #[test]
    fn test_duplicate_corpus_ids_rejected() {
        let yaml = r#"
version: "1.0"
corpus:
  - id: 1
    text: "a"
  - id: 1
    text: "b"
"#;

        let err = SimrankConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("corpus id 1"));
    }

    #[test]
    fn test_full_yaml_roundtrip() {
        let yaml = r#"
version: "1.0"
name: "production"

tokenizer:
  version: 1
  unicode: true
  normalize_unicode: true

matcher:
  version: 1
  metric: "shingle"
  shingle_k: 2
  max_results: 4
  seed: 42
  use_parallel: true

query: "the lazy dog"
corpus:
  - id: 1
    text: "The quick brown fox jumps over the lazy dog"
"#;

        let config = SimrankConfig::from_yaml(yaml).unwrap();
        let match_cfg = config.match_config().unwrap();
        assert_eq!(match_cfg.metric, Metric::Shingle { k: 2 });
        assert_eq!(match_cfg.shingle_seed, 42);
        assert!(match_cfg.use_parallel);
        assert!(config.tokenize_config().normalize_unicode);
        assert_eq!(config.query.as_deref(), Some("the lazy dog"));

        let back = SimrankConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(back, config);
    }
}
