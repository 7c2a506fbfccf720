//! # papercheck ingest (`ingest`)
//!
//! Validates input paths and loads documents as UTF-8 text.
//!
//! [`read_document`] is the single entry point: it checks that the path is
//! non-empty, exists and names a regular file within the configured size limit,
//! then reads and decodes it. Non-UTF-8 inputs are handled by BOM sniffing and
//! `chardetng` detection (see [`decode`]).
//!
//! ```rust,no_run
//! use ingest::{read_document, IngestConfig};
//!
//! let doc = read_document("paper.txt", &IngestConfig::default())?;
//! println!("{} bytes of {}", doc.byte_len, doc.encoding);
//! # Ok::<(), ingest::IngestError>(())
//! ```
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn, Level};

pub mod config;
pub mod decode;
mod error;
mod types;

pub use crate::config::{IngestConfig, DEFAULT_MAX_FILE_BYTES};
pub use crate::decode::{decode_bytes, detect, Decoded};
pub use crate::error::IngestError;
pub use crate::types::SourceDocument;

/// Check that `path` names an existing regular file within the size limit.
///
/// Returns the file size in bytes.
pub fn validate_path(path: &Path, cfg: &IngestConfig) -> Result<u64, IngestError> {
    let display = path.display().to_string();
    if display.trim().is_empty() {
        return Err(IngestError::EmptyPath);
    }

    let meta = fs::metadata(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => IngestError::NotFound(display.clone()),
        _ => IngestError::Io {
            path: display.clone(),
            message: err.to_string(),
        },
    })?;
    if !meta.is_file() {
        return Err(IngestError::NotAFile(display));
    }

    let size = meta.len();
    if let Some(limit) = cfg.max_file_bytes {
        if size > limit {
            return Err(IngestError::PayloadTooLarge {
                path: display,
                size,
                limit,
            });
        }
    }
    Ok(size)
}

/// Validate, read and decode the file at `path`.
pub fn read_document(
    path: impl AsRef<Path>,
    cfg: &IngestConfig,
) -> Result<SourceDocument, IngestError> {
    let start = Instant::now();
    let path = path.as_ref();
    let span = tracing::span!(Level::INFO, "ingest.read", path = %path.display());
    let _guard = span.enter();

    match read_inner(path, cfg) {
        Ok(doc) => {
            info!(
                encoding = %doc.encoding,
                byte_len = doc.byte_len,
                had_bom = doc.had_bom,
                elapsed_micros = start.elapsed().as_micros(),
                "read_success"
            );
            Ok(doc)
        }
        Err(err) => {
            warn!(
                error = %err,
                elapsed_micros = start.elapsed().as_micros(),
                "read_failure"
            );
            Err(err)
        }
    }
}

fn read_inner(path: &Path, cfg: &IngestConfig) -> Result<SourceDocument, IngestError> {
    let forced = cfg.forced_encoding()?;
    let size = validate_path(path, cfg)?;

    let bytes = fs::read(path).map_err(|err| IngestError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    debug!(expected = size, read = bytes.len(), "bytes_loaded");

    let decoded =
        decode_bytes(&bytes, forced).map_err(|encoding| IngestError::UnsupportedEncoding {
            path: path.display().to_string(),
            encoding: encoding.name().to_string(),
        })?;

    Ok(SourceDocument {
        path: path.to_path_buf(),
        text: decoded.text,
        encoding: decoded.encoding.name().to_string(),
        byte_len: bytes.len() as u64,
        had_bom: decoded.had_bom,
    })
}
