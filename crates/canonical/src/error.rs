use thiserror::Error;

/// Errors that can occur while building a canonical document.
///
/// Tokenization itself is total; only the document envelope can be invalid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("canonical document requires a non-empty doc_id")]
    MissingDocId,
}
