//! Error types produced by the ingest crate.
//!
//! Every variant carries the offending path as text so errors stay cloneable
//! and comparable in tests.
//!
//! | Error | Description |
//! |-------|-------------|
//! | [`EmptyPath`](IngestError::EmptyPath) | Path argument was blank |
//! | [`NotFound`](IngestError::NotFound) | Nothing exists at the path |
//! | [`NotAFile`](IngestError::NotAFile) | Path exists but is a directory or special file |
//! | [`PayloadTooLarge`](IngestError::PayloadTooLarge) | File exceeds `max_file_bytes` |
//! | [`UnsupportedEncoding`](IngestError::UnsupportedEncoding) | Bytes could not be decoded losslessly |
//! | [`Io`](IngestError::Io) | Any other filesystem failure |
//! | [`InvalidConfig`](IngestError::InvalidConfig) | [`IngestConfig`](crate::IngestConfig) failed validation |
//!
//! ```rust
//! use ingest::IngestError;
//!
//! let err = IngestError::NotFound("paper.txt".into());
//! assert_eq!(err.to_string(), "file not found: paper.txt");
//! ```
use thiserror::Error;

/// Errors raised while validating and loading an input document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    #[error("path is empty")]
    EmptyPath,

    #[error("file not found: {0}")]
    NotFound(String),

    /// The path resolves to something that cannot be read as a document.
    #[error("not a regular file: {0}")]
    NotAFile(String),

    #[error("i/o error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("file {path} is {size} bytes, exceeding the {limit} byte limit")]
    PayloadTooLarge { path: String, size: u64, limit: u64 },

    /// Decoding with the detected (or forced) encoding produced replacement
    /// characters.
    #[error("cannot decode {path} as {encoding} without loss")]
    UnsupportedEncoding { path: String, encoding: String },

    #[error("invalid ingest config: {0}")]
    InvalidConfig(String),
}
