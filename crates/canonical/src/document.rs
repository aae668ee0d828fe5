//! Immutable document snapshots.
//!
//! A [`Document`] owns its identifier, its raw text and the token sequence
//! derived from that text. Tokens are produced exactly once, at construction,
//! and the document cannot be mutated afterwards.
//!
//! # Examples
//!
//! ```rust
//! use canonical::Document;
//!
//! let doc = Document::new(7u64, "The lazy dog sleeps.");
//! assert_eq!(*doc.id(), 7);
//! assert_eq!(doc.tokens(), ["the", "lazy", "dog", "sleeps"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::TokenizeConfig;
use crate::error::CanonicalError;
use crate::token::{tokenize, tokenize_with};

/// A reference (or query) document with its derived tokens.
///
/// `I` is an opaque, comparable identifier, typically an integer.
///
/// Deserialization reads only `id` and `text` and re-tokenizes with the
/// default configuration; a serialized `tokens` field is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "DocumentSource<I>")]
pub struct Document<I> {
    id: I,
    text: String,
    tokens: Vec<String>,
}

#[derive(Deserialize)]
struct DocumentSource<I> {
    id: I,
    text: String,
}

impl<I> From<DocumentSource<I>> for Document<I> {
    fn from(src: DocumentSource<I>) -> Self {
        Document::new(src.id, src.text)
    }
}

impl<I> Document<I> {
    /// Build a document, tokenizing with the default configuration.
    pub fn new(id: I, text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = tokenize(&text);
        Self { id, text, tokens }
    }

    /// Build a document with an explicit tokenizer configuration.
    pub fn with_config(
        id: I,
        text: impl Into<String>,
        cfg: &TokenizeConfig,
    ) -> Result<Self, CanonicalError> {
        let text = text.into();
        let tokens = tokenize_with(&text, cfg)?;
        Ok(Self { id, text, tokens })
    }

    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized tokens in original order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when tokenization left nothing to compare.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Identifier and token slice, the shape the ranking engine consumes.
    pub fn as_entry(&self) -> (&I, &[String]) {
        (&self.id, &self.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_derived_once_from_text() {
        let doc = Document::new(1u32, "A fox fled from danger to safety");
        assert_eq!(doc.text(), "A fox fled from danger to safety");
        assert_eq!(
            doc.tokens(),
            ["a", "fox", "fled", "from", "danger", "to", "safety"]
        );
        assert!(!doc.is_empty());
    }

    #[test]
    fn punctuation_only_document_is_empty() {
        let doc = Document::new("p", "?! -- ...");
        assert!(doc.is_empty());
        assert_eq!(doc.as_entry(), (&"p", &[][..]));
    }

    #[test]
    fn with_config_uses_unicode_rules() {
        let cfg = TokenizeConfig::new().with_unicode(true);
        let doc = Document::with_config(3u8, "Über café", &cfg).unwrap();
        assert_eq!(doc.tokens(), ["über", "café"]);
    }

    #[test]
    fn deserialize_retokenizes_text() {
        let json = r#"{"id": 4, "text": "The Lazy dog!", "tokens": ["forged"]}"#;
        let doc: Document<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(doc.tokens(), ["the", "lazy", "dog"]);

        let back: Document<u32> =
            serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn with_config_rejects_invalid_config() {
        let cfg = TokenizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(Document::with_config(1, "text", &cfg).is_err());
    }
}
