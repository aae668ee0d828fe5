//! Configuration types for word tokenization.
//!
//! This module defines [`TokenizeConfig`], which controls how raw text is
//! split and normalized into word tokens.
//!
//! # Versioning
//!
//! The `version` field tracks tokenizer behavior. Any change that can alter
//! the produced tokens (even a bug fix) must come with a version bump so that
//! scores computed under an older version stay reproducible.
//!
//! # Reference Compatibility
//!
//! The default configuration is ASCII-exact: whitespace-delimited units keep
//! only `[A-Za-z0-9]`, lowercased, and units that end up empty are dropped.
//! This is the normalization reference score tables were produced with.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use canonical::TokenizeConfig;
//!
//! let config = TokenizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(!config.unicode);
//! assert!(!config.normalize_unicode);
//! ```
//!
//! ## Unicode-Aware Tokens
//!
//! ```rust
//! use canonical::TokenizeConfig;
//!
//! let config = TokenizeConfig::new().with_unicode(true).with_normalize_unicode(true);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the word tokenizer.
///
/// `TokenizeConfig` is cheap to clone and serializable so it can live inside
/// higher-level configuration files.
///
/// # Fields
///
/// - `version`: behavior version, must be >= 1
/// - `unicode`: keep Unicode alphanumerics instead of ASCII only
/// - `normalize_unicode`: apply NFKC before splitting (only with `unicode`)
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "unicode": false,
///   "normalize_unicode": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizeConfig {
    /// Tokenizer behavior version.
    ///
    /// Version 0 is reserved and rejected by [`TokenizeConfig::validate`].
    pub version: u32,

    /// If true, retain every Unicode alphanumeric character and apply full
    /// Unicode lowercasing (which may expand one character into several).
    ///
    /// If false, only ASCII letters and digits survive and everything else,
    /// including accented letters, is stripped.
    ///
    /// # Default
    ///
    /// `false`
    pub unicode: bool,

    /// If true, apply Unicode NFKC normalization to the input before it is
    /// split. Composed and decomposed spellings of the same text then yield
    /// the same tokens:
    ///
    /// ```text
    /// "Café" (U+00E9)        → "café"
    /// "Cafe" + U+0301 accent → "café"
    /// ```
    ///
    /// Ignored unless `unicode` is enabled, since the ASCII tokenizer drops
    /// every non-ASCII character anyway.
    ///
    /// # Default
    ///
    /// `false`
    pub normalize_unicode: bool,
}

impl TokenizeConfig {
    /// Create a new configuration with reference-compatible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep Unicode alphanumerics instead of ASCII letters and digits only.
    pub fn with_unicode(mut self, unicode: bool) -> Self {
        self.unicode = unicode;
        self
    }

    /// Apply NFKC normalization before splitting.
    pub fn with_normalize_unicode(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            unicode: false,
            normalize_unicode: false,
        }
    }
}
