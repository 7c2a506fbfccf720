use canonical::CanonicalError;
use perceptual::{PerceptualError, SimHashFingerprint};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::verdict::Verdict;

/// Identifier for the similarity metric used by a comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MetricId {
    /// Hamming distance between 64-bit SimHash fingerprints.
    #[default]
    Hamming,
    /// Cosine similarity between frequency vectors.
    Cosine,
}

impl MetricId {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricId::Hamming => "hamming",
            MetricId::Cosine => "cosine",
        }
    }
}

/// Vector granularity for the cosine metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CosineUnit {
    /// One dimension per distinct token.
    #[default]
    Token,
    /// One dimension per distinct character of the token stream.
    Char,
}

/// Configuration for a comparison.
///
/// Cheap to clone and serde-friendly so it can be embedded in the
/// top-level YAML config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Configuration schema version.
    #[serde(default = "MatchConfig::default_version")]
    pub version: String,
    /// Scoring strategy.
    #[serde(default)]
    pub metric: MetricId,
    /// Only consulted when `metric` is [`MetricId::Cosine`].
    #[serde(default)]
    pub cosine_unit: CosineUnit,
}

impl MatchConfig {
    pub(crate) fn default_version() -> String {
        "v1".to_string()
    }

    pub fn with_metric(mut self, metric: MetricId) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_cosine_unit(mut self, unit: CosineUnit) -> Self {
        self.cosine_unit = unit;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version.trim().is_empty() {
            return Err(MatchError::InvalidConfig(
                "config.version must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            metric: MetricId::Hamming,
            cosine_unit: CosineUnit::Token,
        }
    }
}

/// Result of comparing one document pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchOutcome {
    /// Metric that produced `similarity`.
    pub metric: MetricId,
    /// Hamming distance in [0, 64]; `None` for cosine.
    pub distance: Option<u32>,
    /// Similarity in [0.0, 1.0].
    pub similarity: f64,
    /// Qualitative bucket for `similarity`.
    pub verdict: Verdict,
    /// Fingerprint of the original document (Hamming only).
    pub original: Option<SimHashFingerprint>,
    /// Fingerprint of the candidate document (Hamming only).
    pub candidate: Option<SimHashFingerprint>,
}

impl MatchOutcome {
    /// Similarity as a percentage with two decimals, e.g. `"87.50%"`.
    pub fn percent(&self) -> String {
        format!("{:.2}%", self.similarity * 100.0)
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Canonical stage failed.
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
    /// Fingerprinting failed.
    #[error("perceptual error: {0}")]
    Perceptual(#[from] PerceptualError),
}
