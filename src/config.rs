//! YAML configuration file support.
//!
//! Every stage config can be set from one YAML file. Omitted sections and
//! fields fall back to their defaults, so an empty document only needs the
//! `version` key.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "thesis batch"
//!
//! ingest:
//!   version: 1
//!   max_file_bytes: 16777216
//!   encoding: null        # or "gbk", "utf-16le", ...
//!
//! perceptual:
//!   version: 1
//!   hasher: djb2          # or xxh3
//!
//! matcher:
//!   version: "v1"
//!   metric: hamming       # or cosine
//!   cosine_unit: token    # or char
//!
//! report:
//!   separator: "\n==== new check record ====\n\n"
//! ```

use std::fs;
use std::path::Path;

use ingest::IngestConfig;
use matcher::MatchConfig;
use perceptual::SimHashConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::ReportConfig;

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for one papercheck run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct PapercheckConfig {
    /// Configuration format version.
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub ingest: IngestConfig,

    /// SimHash fingerprinting.
    #[serde(default)]
    pub perceptual: SimHashConfig,

    /// Scoring metric selection.
    #[serde(default)]
    pub matcher: MatchConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl PapercheckConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PapercheckConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the format version and every stage config.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.ingest
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("ingest: {err}")))?;
        self.perceptual
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("perceptual: {err}")))?;
        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))?;
        Ok(())
    }
}

impl Default for PapercheckConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            ingest: IngestConfig::default(),
            perceptual: SimHashConfig::default(),
            matcher: MatchConfig::default(),
            report: ReportConfig::default(),
        }
    }
}
