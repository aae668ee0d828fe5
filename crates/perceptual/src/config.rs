//! Configuration and error types for shingle-based similarity.
//!
//! This module defines the public configuration surface for the shingle
//! layer. It is free of any I/O or environment-dependent behavior, so a
//! shingle set is a pure function of `(tokens, config)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default hash seed for shingle hashing.
pub const DEFAULT_SEED: u64 = 0xF00D_BAAD_F00D_BAAD;

/// Configuration for shingling and Jaccard scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShingleConfig {
    /// Configuration schema version.
    ///
    /// Any change that can alter shingle hashes must bump this version.
    pub version: u32,
    /// Number of tokens per shingle (k‑shingling).
    ///
    /// Larger values make the score more sensitive to word order; sequences
    /// shorter than `k` produce no shingles at all.
    pub k: usize,
    /// Seed for shingle hashing.
    ///
    /// Two configs with the same seed and `k` produce identical shingle sets
    /// for identical token sequences.
    pub seed: u64,
}

impl ShingleConfig {
    /// Create a new configuration with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shingle width (k).
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the hash seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.version < 1 {
            return Err(PerceptualError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.k < 1 {
            return Err(PerceptualError::InvalidConfigK { k: self.k });
        }
        Ok(())
    }
}

impl Default for ShingleConfig {
    fn default() -> Self {
        Self {
            version: 1,
            k: 3,
            seed: DEFAULT_SEED,
        }
    }
}

/// Errors returned by the shingle layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("invalid config: k must be >= 1 (got {k})")]
    InvalidConfigK { k: usize },

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = ShingleConfig::default();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.k, 3);
        assert_eq!(cfg.seed, DEFAULT_SEED);
        assert_eq!(cfg, ShingleConfig::new());
    }

    #[test]
    fn config_builder_chain() {
        let cfg = ShingleConfig::new().with_k(5).with_seed(42);
        assert_eq!(cfg.k, 5);
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn config_validate_valid() {
        assert!(ShingleConfig::default().validate().is_ok());
        assert!(ShingleConfig::new().with_k(1).validate().is_ok());
    }

    #[test]
    fn config_validate_invalid_k_zero() {
        let cfg = ShingleConfig::new().with_k(0);
        assert!(matches!(
            cfg.validate(),
            Err(PerceptualError::InvalidConfigK { k: 0 })
        ));
    }

    #[test]
    fn config_validate_invalid_version_zero() {
        let cfg = ShingleConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PerceptualError::InvalidConfigVersion { version: 0 })
        ));
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = ShingleConfig::new().with_k(4).with_seed(12345);
        let serialized = serde_json::to_string(&cfg).unwrap();
        let deserialized: ShingleConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cfg, deserialized);
    }

    #[test]
    fn error_display_invalid_config_k() {
        let err = PerceptualError::InvalidConfigK { k: 0 };
        assert!(err.to_string().contains("invalid config"));
        assert!(err.to_string().contains("k must be >= 1"));
    }
}
