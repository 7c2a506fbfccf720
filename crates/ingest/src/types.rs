use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A document loaded from disk and decoded to UTF-8.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub text: String,
    /// Canonical name of the encoding that was used, e.g. `"UTF-8"` or `"GBK"`.
    pub encoding: String,
    /// Size of the raw file in bytes.
    pub byte_len: u64,
    pub had_bom: bool,
}

impl SourceDocument {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
