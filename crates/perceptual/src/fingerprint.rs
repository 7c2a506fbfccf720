//! Fingerprint and metadata types produced by the SimHash stage.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hash::TokenHasher;

/// Final SimHash artifact for one document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimHashFingerprint {
    /// The 64-bit signature.
    pub simhash: u64,
    /// How the signature was produced.
    pub meta: SimHashMeta,
}

/// Renders the signature as 16 lowercase hex digits.
impl fmt::Display for SimHashFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.simhash)
    }
}

/// Metadata for traceability and determinism.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimHashMeta {
    /// Algorithm version owned by this crate.
    pub perceptual_version: u16,
    /// Per-token hash function used.
    pub hasher: TokenHasher,
    /// Signature width in bits.
    pub bits: u32,
    /// Distinct tokens that voted.
    pub unique_tokens: usize,
    /// Total token occurrences (sum of weights).
    pub total_tokens: u64,
    /// Configuration schema version supplied by the caller.
    pub config_version: u32,
}
