//! Workspace umbrella crate for papercheck, a SimHash plagiarism checker.
//!
//! This crate stitches together file ingest, canonicalization, fingerprinting
//! and scoring so callers can compare two documents with a single call.
//!
//! ```
//! use papercheck::{compare_texts, PapercheckConfig, Verdict};
//!
//! let cfg = PapercheckConfig::default();
//! let cmp = compare_texts("The cat sat.", "the CAT sat!", &cfg).unwrap();
//! assert_eq!(cmp.outcome.distance, Some(0));
//! assert_eq!(cmp.outcome.verdict, Verdict::High);
//! ```
//!
//! The pure building blocks are re-exported at the top level:
//! [`fingerprint`], [`hamming_distance`], [`similarity`] and [`classify`].

pub mod config;
pub mod report;

pub use canonical::{
    CanonicalError, CanonicalizedDocument, FrequencyTable, Token, canonicalize, tokenize,
};
pub use ingest::{IngestConfig, IngestError, SourceDocument, read_document};
pub use matcher::{
    CosineUnit, MatchConfig, MatchError, MatchOutcome, Matcher, MetricId, Verdict, classify,
    cosine_similarity, hamming_distance, similarity, similarity64,
};
pub use perceptual::{
    PerceptualError, SimHashConfig, SimHashFingerprint, TokenHasher, djb2_64, fingerprint,
};

pub use crate::config::{ConfigLoadError, PapercheckConfig};
pub use crate::report::{CheckRecord, ReportConfig, ReportError, append_record};

use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{Level, info, warn};

/// Errors that can occur while comparing two documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Ingest(IngestError),
    Canonical(CanonicalError),
    Perceptual(PerceptualError),
    Match(MatchError),
    Report(ReportError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Ingest(err) => write!(f, "{err}"),
            PipelineError::Canonical(err) => write!(f, "canonicalization failure: {err}"),
            PipelineError::Perceptual(err) => write!(f, "fingerprinting failed: {err}"),
            PipelineError::Match(err) => write!(f, "matching failed: {err}"),
            PipelineError::Report(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Ingest(err) => Some(err),
            PipelineError::Canonical(err) => Some(err),
            PipelineError::Perceptual(err) => Some(err),
            PipelineError::Match(err) => Some(err),
            PipelineError::Report(err) => Some(err),
        }
    }
}

impl From<IngestError> for PipelineError {
    fn from(value: IngestError) -> Self {
        PipelineError::Ingest(value)
    }
}

impl From<CanonicalError> for PipelineError {
    fn from(value: CanonicalError) -> Self {
        PipelineError::Canonical(value)
    }
}

impl From<PerceptualError> for PipelineError {
    fn from(value: PerceptualError) -> Self {
        PipelineError::Perceptual(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        // Surface the stage that actually failed.
        match value {
            MatchError::Canonical(err) => PipelineError::Canonical(err),
            MatchError::Perceptual(err) => PipelineError::Perceptual(err),
            other => PipelineError::Match(other),
        }
    }
}

impl From<ReportError> for PipelineError {
    fn from(value: ReportError) -> Self {
        PipelineError::Report(value)
    }
}

/// Identity of one side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub doc_id: String,
    /// Source encoding; `None` when the text did not come from a file.
    pub encoding: Option<String>,
    pub sha256_hex: String,
    pub token_count: usize,
    pub unique_tokens: usize,
}

impl DocumentSummary {
    fn new(doc: &CanonicalizedDocument, encoding: Option<String>) -> Self {
        Self {
            doc_id: doc.doc_id.clone(),
            encoding,
            sha256_hex: doc.sha256_hex.clone(),
            token_count: doc.tokens.len(),
            unique_tokens: doc.frequencies.len(),
        }
    }
}

/// Outcome of comparing one document pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub original: DocumentSummary,
    pub candidate: DocumentSummary,
    pub outcome: MatchOutcome,
}

/// A comparison plus the wall-clock bounds of the run that produced it.
#[derive(Debug, Clone)]
pub struct CheckSummary {
    pub comparison: Comparison,
    pub started: DateTime<Local>,
    pub finished: DateTime<Local>,
    pub elapsed_ms: u128,
}

fn build_matcher(cfg: &PapercheckConfig) -> Result<Matcher, PipelineError> {
    Ok(Matcher::new(cfg.perceptual.clone(), cfg.matcher.clone())?)
}

fn compare_canonical(
    matcher: &Matcher,
    original: &CanonicalizedDocument,
    candidate: &CanonicalizedDocument,
    encodings: (Option<String>, Option<String>),
) -> Result<Comparison, PipelineError> {
    let outcome = matcher.compare_documents(original, candidate)?;
    Ok(Comparison {
        original: DocumentSummary::new(original, encodings.0),
        candidate: DocumentSummary::new(candidate, encodings.1),
        outcome,
    })
}

/// Compare two in-memory texts.
pub fn compare_texts(
    original: &str,
    candidate: &str,
    cfg: &PapercheckConfig,
) -> Result<Comparison, PipelineError> {
    let matcher = build_matcher(cfg)?;
    let original = canonicalize("original", original)?;
    let candidate = canonicalize("candidate", candidate)?;
    compare_canonical(&matcher, &original, &candidate, (None, None))
}

/// Load, decode and compare two files.
///
/// Both paths are validated before either file is read. A blank input is
/// still compared but logs a `blank_document` warning, since its score says
/// little.
pub fn compare_files(
    original_path: impl AsRef<Path>,
    candidate_path: impl AsRef<Path>,
    cfg: &PapercheckConfig,
) -> Result<Comparison, PipelineError> {
    let original_path = original_path.as_ref();
    let candidate_path = candidate_path.as_ref();
    let matcher = build_matcher(cfg)?;

    ingest::validate_path(original_path, &cfg.ingest)?;
    ingest::validate_path(candidate_path, &cfg.ingest)?;

    let original = read_document(original_path, &cfg.ingest)?;
    let candidate = read_document(candidate_path, &cfg.ingest)?;
    for doc in [&original, &candidate] {
        if doc.is_blank() {
            warn!(path = %doc.path.display(), "blank_document");
        }
    }

    let original_doc = canonicalize(original.path.display().to_string(), &original.text)?;
    let candidate_doc = canonicalize(candidate.path.display().to_string(), &candidate.text)?;

    compare_canonical(
        &matcher,
        &original_doc,
        &candidate_doc,
        (Some(original.encoding), Some(candidate.encoding)),
    )
}

/// Compare two files and append the outcome to `result_path`.
///
/// The result file is only touched once the comparison has succeeded, so a
/// failed run never creates or truncates it.
pub fn run_check(
    original_path: impl AsRef<Path>,
    candidate_path: impl AsRef<Path>,
    result_path: impl AsRef<Path>,
    cfg: &PapercheckConfig,
) -> Result<CheckSummary, PipelineError> {
    let original_path = original_path.as_ref();
    let candidate_path = candidate_path.as_ref();
    let result_path = result_path.as_ref();

    let span = tracing::span!(
        Level::INFO,
        "papercheck.run",
        original = %original_path.display(),
        candidate = %candidate_path.display(),
        result = %result_path.display()
    );
    let _guard = span.enter();

    for path in [original_path, candidate_path, result_path] {
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(IngestError::EmptyPath.into());
        }
    }

    let started = Local::now();
    let clock = Instant::now();

    let comparison = match compare_files(original_path, candidate_path, cfg) {
        Ok(comparison) => comparison,
        Err(err) => {
            warn!(error = %err, "check_failure");
            return Err(err);
        }
    };

    let elapsed_ms = clock.elapsed().as_millis();
    let finished = Local::now();

    let record = CheckRecord {
        started,
        finished,
        elapsed_ms,
        original_path,
        candidate_path,
        comparison: &comparison,
    };
    append_record(result_path, &record, &cfg.report)?;

    info!(
        similarity = comparison.outcome.similarity,
        verdict = comparison.outcome.verdict.label(),
        elapsed_ms = elapsed_ms as u64,
        "check_success"
    );

    Ok(CheckSummary {
        comparison,
        started,
        finished,
        elapsed_ms,
    })
}
