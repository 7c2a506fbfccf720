//! Per-token 64-bit hashes feeding the SimHash vote.
//!
//! [`djb2_64`] is the reference hash and the default. It mixes poorly: a
//! token of fewer than ~10 ASCII characters never reaches the upper bits, so
//! short-token documents agree on most high bits regardless of content.
//! [`TokenHasher::Xxh3`] is available for callers who accept fingerprints
//! that are not comparable with DJB2 ones.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// DJB2 seed.
const DJB2_SEED: u64 = 5381;

/// DJB2 over Unicode code points with 64-bit wrapping arithmetic.
///
/// `hash = hash * 33 + code_point` for every char, starting from 5381.
/// The empty token hashes to 0.
#[inline]
pub fn djb2_64(token: &str) -> u64 {
    if token.is_empty() {
        return 0;
    }
    token.chars().fold(DJB2_SEED, |hash, ch| {
        (hash << 5).wrapping_add(hash).wrapping_add(u64::from(ch))
    })
}

/// Selects the per-token hash function.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenHasher {
    /// DJB2 over code points. Stable reference algorithm.
    #[default]
    Djb2,
    /// xxh3-64 (seed 0) over the UTF-8 bytes. Better bit dispersion.
    Xxh3,
}

impl TokenHasher {
    #[inline]
    pub fn hash(self, token: &str) -> u64 {
        match self {
            TokenHasher::Djb2 => djb2_64(token),
            TokenHasher::Xxh3 if token.is_empty() => 0,
            TokenHasher::Xxh3 => xxh3_64(token.as_bytes()),
        }
    }

    /// Stable identifier recorded in fingerprint metadata.
    pub fn name(self) -> &'static str {
        match self {
            TokenHasher::Djb2 => "djb2_64",
            TokenHasher::Xxh3 => "xxh3_64",
        }
    }
}
