//! # papercheck perceptual fingerprinting
//!
//! Turns a document's term frequency table into a 64-bit SimHash: a
//! locality-sensitive signature where documents that share many
//! high-frequency tokens end up a small Hamming distance apart.
//!
//! ## Contract
//!
//! - Consumes [`canonical::FrequencyTable`] values; never tokenizes on its
//!   own except through the [`fingerprint`] convenience wrapper.
//! - Pure function of `(frequency_table, config)`: no I/O, no clocks, no
//!   global state, no random seeding.
//!
//! ## Pipeline
//!
//! 1. **Token hashing**: every distinct token is hashed to 64 bits
//!    ([`djb2_64`] by default).
//! 2. **Voting**: each hash votes on every bit position, weighted by the
//!    token's frequency ([`BitAccumulator`]).
//! 3. **Folding**: positive vote totals become 1 bits, everything else 0.
//!
//! ## Example Usage
//!
//! ```
//! use canonical::FrequencyTable;
//! use perceptual::{perceptualize, SimHashConfig};
//!
//! let table = FrequencyTable::from_text("a a b");
//! let fp = perceptualize(&table, &SimHashConfig::default()).unwrap();
//!
//! assert_eq!(fp.simhash, perceptual::djb2_64("a"));
//! assert_eq!(fp.meta.unique_tokens, 2);
//! assert_eq!(fp.meta.total_tokens, 3);
//! ```

pub mod config;
pub mod fingerprint;
mod hash;
mod simhash;

pub use crate::config::{PerceptualError, SimHashConfig};
pub use crate::fingerprint::{SimHashFingerprint, SimHashMeta};
pub use crate::hash::{djb2_64, TokenHasher};
pub use crate::simhash::{
    fingerprint, simhash_from_frequencies, simhash_weighted, simhash_with, BitAccumulator,
    FINGERPRINT_BITS,
};

use canonical::FrequencyTable;

/// Current SimHash algorithm version for this crate.
pub const PERCEPTUAL_VERSION: u16 = 1;

/// Compute a SimHash fingerprint with metadata from a frequency table.
pub fn perceptualize(
    table: &FrequencyTable,
    cfg: &SimHashConfig,
) -> Result<SimHashFingerprint, PerceptualError> {
    cfg.validate()?;

    Ok(SimHashFingerprint {
        simhash: simhash_with(table, cfg.hasher),
        meta: SimHashMeta {
            perceptual_version: PERCEPTUAL_VERSION,
            hasher: cfg.hasher,
            bits: FINGERPRINT_BITS,
            unique_tokens: table.len(),
            total_tokens: table.total(),
            config_version: cfg.version,
        },
    })
}
