//! Weighted bit-majority vote (SimHash) over term frequencies.
//!
//! Each distinct token votes on all 64 bit positions with its frequency as
//! weight: `+w` where its hash has a 1, `-w` where it has a 0. A bit of the
//! fingerprint is set only when its vote total is strictly positive. Bit
//! position 0 of the vote is the most significant bit of the result.
//!
//! Votes are plain additions, so the order in which tokens are fed does not
//! change the result.

use canonical::FrequencyTable;

use crate::hash::TokenHasher;

/// Fingerprint width in bits.
pub const FINGERPRINT_BITS: u32 = 64;

const WIDTH: usize = FINGERPRINT_BITS as usize;

/// Per-bit vote totals used while folding one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitAccumulator {
    votes: [i64; WIDTH],
}

impl Default for BitAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl BitAccumulator {
    pub fn new() -> Self {
        Self { votes: [0; WIDTH] }
    }

    /// Apply one token's vote.
    #[inline]
    pub fn add(&mut self, hash: u64, weight: u32) {
        let weight = i64::from(weight);
        for (i, vote) in self.votes.iter_mut().enumerate() {
            if (hash >> (WIDTH - 1 - i)) & 1 == 1 {
                *vote += weight;
            } else {
                *vote -= weight;
            }
        }
    }

    /// Collapse the votes into a fingerprint; ties resolve to 0.
    pub fn fold(&self) -> u64 {
        let mut out = 0u64;
        for (i, vote) in self.votes.iter().enumerate() {
            if *vote > 0 {
                out |= 1u64 << (WIDTH - 1 - i);
            }
        }
        out
    }
}

/// SimHash over explicit `(token, weight)` pairs.
pub fn simhash_weighted<I, S>(pairs: I, hasher: TokenHasher) -> u64
where
    I: IntoIterator<Item = (S, u32)>,
    S: AsRef<str>,
{
    let mut acc = BitAccumulator::new();
    for (token, weight) in pairs {
        acc.add(hasher.hash(token.as_ref()), weight);
    }
    acc.fold()
}

/// SimHash of a frequency table with the given token hasher.
pub fn simhash_with(table: &FrequencyTable, hasher: TokenHasher) -> u64 {
    if table.is_empty() {
        return 0;
    }
    simhash_weighted(table.iter(), hasher)
}

/// SimHash of a frequency table using DJB2 token hashes.
pub fn simhash_from_frequencies(table: &FrequencyTable) -> u64 {
    simhash_with(table, TokenHasher::Djb2)
}

/// Tokenize, count and fold `text` into its 64-bit fingerprint.
///
/// Empty, whitespace-only or absent text yields 0.
pub fn fingerprint<'a>(text: impl Into<Option<&'a str>>) -> u64 {
    simhash_from_frequencies(&FrequencyTable::from_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::djb2_64;

    #[test]
    fn single_token_fingerprint_is_its_hash() {
        assert_eq!(fingerprint("plagiarism"), djb2_64("plagiarism"));
        assert_eq!(fingerprint("Plagiarism!!"), 0x7272_736a_9876_690e);
    }

    #[test]
    fn heavier_token_wins_disputed_bits() {
        // "a" (x2) and "b" (x1) differ only in the lowest bit.
        assert_eq!(fingerprint("a a b"), djb2_64("a"));
        assert_eq!(fingerprint("ab ab cd"), djb2_64("ab"));
    }

    #[test]
    fn ties_resolve_to_zero() {
        // Equal weights: disputed bits cancel to 0, agreed bits survive.
        assert_eq!(fingerprint("a b"), djb2_64("a") & djb2_64("b"));
    }

    #[test]
    fn known_sentence_fingerprints() {
        assert_eq!(
            fingerprint("the quick brown fox jumps over the lazy dog"),
            4_488_490_022
        );
        assert_eq!(fingerprint("SimHash!@#哈希123test"), 303_185);
    }

    #[test]
    fn empty_inputs_fold_to_zero() {
        assert_eq!(fingerprint(""), 0);
        assert_eq!(fingerprint("   \n\t"), 0);
        assert_eq!(fingerprint("!!! ??? ..."), 0);
        let absent: Option<&str> = None;
        assert_eq!(fingerprint(absent), 0);
        assert_eq!(simhash_from_frequencies(&FrequencyTable::default()), 0);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(fingerprint("SimHash"), fingerprint("simhash"));
        assert_eq!(fingerprint("HELLO World"), fingerprint("hello world"));
    }

    #[test]
    fn order_independent() {
        let pairs = vec![
            ("alpha".to_string(), 3u32),
            ("beta".to_string(), 1),
            ("gamma".to_string(), 2),
            ("是一种哈希算法".to_string(), 5),
        ];
        let forward = simhash_weighted(pairs.clone(), TokenHasher::Djb2);
        let mut reversed = pairs.clone();
        reversed.reverse();
        let mut rotated = pairs.clone();
        rotated.rotate_left(2);

        assert_eq!(forward, simhash_weighted(reversed, TokenHasher::Djb2));
        assert_eq!(forward, simhash_weighted(rotated, TokenHasher::Djb2));

        let table: FrequencyTable = pairs.into_iter().collect();
        assert_eq!(forward, simhash_from_frequencies(&table));
    }

    #[test]
    fn accumulator_votes_msb_first() {
        let mut acc = BitAccumulator::new();
        acc.add(1u64 << 63, 4);
        assert_eq!(acc.fold(), 1u64 << 63);
        // A heavier opposing vote flips the top bit and sets the rest.
        acc.add(!(1u64 << 63), 5);
        assert_eq!(acc.fold(), !(1u64 << 63));
    }

    #[test]
    fn zero_weight_votes_nothing() {
        let mut acc = BitAccumulator::default();
        acc.add(u64::MAX, 0);
        assert_eq!(acc.fold(), 0);
    }

    #[test]
    fn xxh3_hasher_changes_fingerprint() {
        let table = FrequencyTable::from_text("plagiarism");
        assert_ne!(
            simhash_with(&table, TokenHasher::Xxh3),
            simhash_with(&table, TokenHasher::Djb2)
        );
        assert_eq!(simhash_with(&FrequencyTable::default(), TokenHasher::Xxh3), 0);
    }
}
