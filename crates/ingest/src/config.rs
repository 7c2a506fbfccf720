//! Configuration for document loading.
//!
//! ```rust
//! use ingest::IngestConfig;
//!
//! let config = IngestConfig::default().with_encoding("gbk");
//! config.validate().expect("gbk is a known label");
//! ```
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::error::IngestError;

/// Default upper bound on input file size: 16 MiB.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;

/// Runtime configuration for [`read_document`](crate::read_document).
///
/// - `max_file_bytes`: reject larger files before reading them; `None` disables
///   the check.
/// - `encoding`: a WHATWG label (`"utf-8"`, `"gbk"`, `"windows-1252"`, ...)
///   that skips detection entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IngestConfig {
    pub version: u32,
    pub max_file_bytes: Option<u64>,
    pub encoding: Option<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            version: 1,
            max_file_bytes: Some(DEFAULT_MAX_FILE_BYTES),
            encoding: None,
        }
    }
}

impl IngestConfig {
    pub fn with_max_file_bytes(mut self, limit: Option<u64>) -> Self {
        self.max_file_bytes = limit;
        self
    }

    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Check invariants: version >= 1, non-zero size limit, known encoding label.
    pub fn validate(&self) -> Result<(), IngestError> {
        if self.version == 0 {
            return Err(IngestError::InvalidConfig(
                "version must be >= 1".to_string(),
            ));
        }
        if self.max_file_bytes == Some(0) {
            return Err(IngestError::InvalidConfig(
                "max_file_bytes must be > 0 when set".to_string(),
            ));
        }
        self.forced_encoding().map(|_| ())
    }

    /// Resolve the configured encoding label, if any.
    pub fn forced_encoding(&self) -> Result<Option<&'static Encoding>, IngestError> {
        match self.encoding.as_deref() {
            None => Ok(None),
            Some(label) => Encoding::for_label(label.trim().as_bytes())
                .map(Some)
                .ok_or_else(|| {
                    IngestError::InvalidConfig(format!("unknown encoding label '{label}'"))
                }),
        }
    }
}
