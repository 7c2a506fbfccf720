//! Canonical document: the token stream, its frequency table and digest.
//!
//! # Determinism
//!
//! For a fixed [`CANONICAL_VERSION`] and input text every field of
//! [`CanonicalizedDocument`] is reproducible on any machine.
//!
//! ```rust
//! use canonical::canonicalize;
//!
//! let doc = canonicalize("doc-001", "Hello, hello world!").unwrap();
//! assert_eq!(doc.tokens.len(), 3);
//! assert_eq!(doc.frequencies.get("hello"), 2);
//! assert_eq!(doc.sha256_hex.len(), 64);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;
use crate::frequency::FrequencyTable;
use crate::hash::hash_token_stream;
use crate::token::{tokenize, Token};

/// Version of the tokenization rules baked into canonical digests.
pub const CANONICAL_VERSION: u32 = 1;

/// The canonical representation of one input document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalizedDocument {
    /// Caller-supplied identifier (usually the input path).
    pub doc_id: String,
    /// Tokens in source order with byte offsets.
    pub tokens: Vec<Token>,
    /// Token → count for the whole document.
    pub frequencies: FrequencyTable,
    /// Canonical identity digest, see [`crate::hash_token_stream`].
    pub sha256_hex: String,
    /// Tokenization rules version used.
    pub canonical_version: u32,
}

impl CanonicalizedDocument {
    /// True when the text contained no alphabet characters at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenize `text` and wrap the result as a [`CanonicalizedDocument`].
///
/// Empty text is valid and produces an empty document; only a blank
/// `doc_id` is rejected.
pub fn canonicalize(
    doc_id: impl Into<String>,
    text: &str,
) -> Result<CanonicalizedDocument, CanonicalError> {
    let doc_id: String = doc_id.into();
    let trimmed = doc_id.trim();
    if trimmed.is_empty() {
        return Err(CanonicalError::MissingDocId);
    }
    let doc_id = if doc_id.len() == trimmed.len() {
        doc_id
    } else {
        trimmed.to_string()
    };

    let tokens = tokenize(text);
    let frequencies = FrequencyTable::from_tokens(&tokens);
    let sha256_hex = hash_token_stream(CANONICAL_VERSION, &tokens);

    Ok(CanonicalizedDocument {
        doc_id,
        tokens,
        frequencies,
        sha256_hex,
        canonical_version: CANONICAL_VERSION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_a_valid_document() {
        let doc = canonicalize("empty", "").expect("empty text is valid");
        assert!(doc.is_empty());
        assert!(doc.frequencies.is_empty());
        assert_eq!(doc.sha256_hex, hash_token_stream(CANONICAL_VERSION, Vec::<&str>::new()));
    }

    #[test]
    fn blank_doc_id_rejected() {
        assert_eq!(canonicalize("  ", "text"), Err(CanonicalError::MissingDocId));
    }

    #[test]
    fn doc_id_is_trimmed() {
        let doc = canonicalize("  a.txt \n", "x").unwrap();
        assert_eq!(doc.doc_id, "a.txt");
    }

    #[test]
    fn digest_ignores_punctuation_and_case() {
        let a = canonicalize("a", "Hello,   WORLD!").unwrap();
        let b = canonicalize("b", "hello world").unwrap();
        assert_eq!(a.sha256_hex, b.sha256_hex);
        assert_ne!(a.tokens, b.tokens); // offsets differ
    }
}
