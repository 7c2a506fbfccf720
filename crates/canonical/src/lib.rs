//! papercheck canonical text layer.
//!
//! Turns raw document text into the token stream every later stage works
//! from.
//!
//! ## What we do
//!
//! - Tokenization: maximal runs of CJK ideographs (U+4E00..=U+9FA5), ASCII
//!   letters or ASCII digits; everything else is a separator
//! - ASCII lowercasing so comparison is case-insensitive
//! - Term frequency tables ([`FrequencyTable`])
//! - A versioned SHA-256 digest of the token stream for result records
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text in, same tokens
//! and digest out, on any machine.

mod document;
mod error;
mod frequency;
mod hash;
mod token;

pub use crate::document::{canonicalize, CanonicalizedDocument, CANONICAL_VERSION};
pub use crate::error::CanonicalError;
pub use crate::frequency::FrequencyTable;
pub use crate::hash::hash_token_stream;
pub use crate::token::{tokenize, tokens, CharClass, Token, Tokens};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_document_end_to_end() {
        let input = "SimHash是一种哈希算法，SimHash 123!";
        let doc = canonicalize("doc-mixed", input).expect("canonicalization succeeds");

        let token_texts: Vec<&str> = doc.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(token_texts, vec!["simhash", "是一种哈希算法", "simhash", "123"]);
        assert_eq!(doc.frequencies.get("simhash"), 2);
        assert_eq!(doc.frequencies.len(), 3);
        assert_eq!(doc.canonical_version, CANONICAL_VERSION);
    }

    #[test]
    fn case_insensitive_documents_share_digest() {
        let a = canonicalize("a", "SimHash").unwrap();
        let b = canonicalize("b", "simhash").unwrap();
        assert_eq!(a.sha256_hex, b.sha256_hex);
        assert_eq!(a.frequencies, b.frequencies);
    }
}
