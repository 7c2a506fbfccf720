//! Configuration and error types for SimHash fingerprinting.
//!
//! Free of I/O and environment lookups: a fingerprint is a pure function of
//! `(frequency_table, config)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hash::TokenHasher;

/// Configuration for the SimHash fingerprint builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimHashConfig {
    /// Configuration schema version.
    ///
    /// Any change that can affect fingerprints must bump this so stored
    /// results stay interpretable.
    #[serde(default = "SimHashConfig::default_version")]
    pub version: u32,
    /// Per-token hash function. Fingerprints built with different hashers
    /// are not comparable.
    #[serde(default)]
    pub hasher: TokenHasher,
}

impl SimHashConfig {
    /// Create a new configuration with the reference defaults.
    pub fn new() -> Self {
        Self::default()
    }

    fn default_version() -> u32 {
        1
    }

    /// Select the per-token hash function.
    pub fn with_hasher(mut self, hasher: TokenHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.version < 1 {
            return Err(PerceptualError::InvalidConfigVersion {
                version: self.version,
            });
        }
        Ok(())
    }
}

impl Default for SimHashConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            hasher: TokenHasher::Djb2,
        }
    }
}

/// Errors returned by the fingerprinting stage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },
}
