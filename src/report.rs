//! Append-only result file.
//!
//! Each run renders one plain-text record. Records accumulate in the same file
//! so earlier results are never lost; a separator block marks the start of
//! every record after the first.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::Comparison;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result file layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Written before a record when the file already has content.
    pub separator: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            separator: "\n========================================\n\
                        ========== new check record ============\n\
                        ========================================\n\n"
                .to_string(),
        }
    }
}

impl ReportConfig {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("cannot create directory {path}: {message}")]
    CreateDir { path: String, message: String },

    #[error("cannot write result file {path}: {message}")]
    Write { path: String, message: String },
}

/// Everything that goes into one result record.
#[derive(Debug, Clone)]
pub struct CheckRecord<'a> {
    pub started: DateTime<Local>,
    pub finished: DateTime<Local>,
    pub elapsed_ms: u128,
    pub original_path: &'a Path,
    pub candidate_path: &'a Path,
    pub comparison: &'a Comparison,
}

impl CheckRecord<'_> {
    /// Render the record body (without separator).
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CheckRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = &self.comparison.outcome;
        writeln!(f, "====== plagiarism check result ======")?;
        writeln!(f, "started:  {}", self.started.format(TIME_FORMAT))?;
        writeln!(f, "finished: {}", self.finished.format(TIME_FORMAT))?;
        writeln!(f, "elapsed:  {} ms", self.elapsed_ms)?;
        writeln!(f)?;
        writeln!(f, "files:")?;
        writeln!(f, "  original:  {}", self.original_path.display())?;
        writeln!(f, "  candidate: {}", self.candidate_path.display())?;
        writeln!(f)?;
        writeln!(f, "metric: {}", outcome.metric.as_str())?;
        if let (Some(a), Some(b)) = (&outcome.original, &outcome.candidate) {
            writeln!(f, "hasher: {}", a.meta.hasher.name())?;
            writeln!(f, "fingerprints: {a} / {b}")?;
        }
        if let Some(distance) = outcome.distance {
            writeln!(f, "hamming distance: {distance}")?;
        }
        writeln!(f, "similarity: {}", outcome.percent())?;
        writeln!(
            f,
            "verdict: {} ({})",
            outcome.verdict.label(),
            outcome.verdict.description()
        )?;
        writeln!(f)?;
        writeln!(f, "digests:")?;
        writeln!(f, "  original:  {}", self.comparison.original.sha256_hex)?;
        writeln!(f, "  candidate: {}", self.comparison.candidate.sha256_hex)
    }
}

/// Append `record` to the file at `path`, creating it and its parent
/// directories when missing.
pub fn append_record(
    path: &Path,
    record: &CheckRecord<'_>,
    cfg: &ReportConfig,
) -> Result<(), ReportError> {
    let shown = path.display().to_string();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| ReportError::CreateDir {
            path: parent.display().to_string(),
            message: err.to_string(),
        })?;
    }

    let write_err = |err: std::io::Error| ReportError::Write {
        path: shown.clone(),
        message: err.to_string(),
    };

    let has_content = fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    if has_content {
        writer.write_all(cfg.separator.as_bytes()).map_err(write_err)?;
    }
    writer
        .write_all(record.render().as_bytes())
        .map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    debug!(path = %shown, separated = has_content, "record_appended");
    Ok(())
}
