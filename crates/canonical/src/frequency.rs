//! Term frequency tables.
//!
//! A [`FrequencyTable`] maps each distinct token to the number of times it
//! occurs in a document. Downstream consumers (SimHash folding, cosine
//! scoring) treat it as an unordered bag: nothing may depend on the
//! iteration order of the underlying map.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::token::tokens;

/// Token → occurrence count, built once per document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u32>,
}

impl FrequencyTable {
    /// Count tokens from any sequence of token-like values.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for token in tokens {
            let token = token.as_ref();
            if let Some(count) = counts.get_mut(token) {
                *count += 1;
            } else {
                counts.insert(token.to_owned(), 1);
            }
        }
        Self { counts }
    }

    /// Tokenize `text` and count the result.
    pub fn from_text<'a>(text: impl Into<Option<&'a str>>) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for token in tokens(text) {
            *counts.entry(token.text).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Character-level counts over every token in this table.
    ///
    /// Each character contributes the count of the token it appears in, so
    /// the result equals counting characters over the original token stream.
    pub fn char_frequencies(&self) -> FrequencyTable {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        let mut buf = [0u8; 4];
        for (token, &count) in &self.counts {
            for ch in token.chars() {
                let key: &str = ch.encode_utf8(&mut buf);
                if let Some(slot) = counts.get_mut(key) {
                    *slot += count;
                } else {
                    counts.insert(key.to_owned(), count);
                }
            }
        }
        Self { counts }
    }

    /// Occurrence count for `token`, zero when absent.
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of token occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Iterate `(token, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, u32)> for FrequencyTable {
    /// Build a table from explicit pairs; repeated keys are summed and zero
    /// counts are dropped.
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for (token, count) in iter {
            if count == 0 || token.is_empty() {
                continue;
            }
            *counts.entry(token).or_insert(0) += count;
        }
        Self { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_tokens() {
        let table = FrequencyTable::from_tokens(["a", "b", "a", "c", "a"]);
        assert_eq!(table.get("a"), 3);
        assert_eq!(table.get("b"), 1);
        assert_eq!(table.get("missing"), 0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn from_text_matches_from_tokens() {
        let text = "The cat saw THE dog; the end.";
        let by_text = FrequencyTable::from_text(text);
        let by_tokens = FrequencyTable::from_tokens(crate::tokenize(text));
        assert_eq!(by_text, by_tokens);
        assert_eq!(by_text.get("the"), 3);
    }

    #[test]
    fn empty_sequence_gives_empty_table() {
        let table = FrequencyTable::from_tokens(Vec::<String>::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(FrequencyTable::from_text("  ...  ").is_empty());
    }

    #[test]
    fn char_frequencies_weight_by_token_count() {
        let table = FrequencyTable::from_tokens(["ab", "ab", "b", "中文"]);
        let chars = table.char_frequencies();
        assert_eq!(chars.get("a"), 2);
        assert_eq!(chars.get("b"), 3);
        assert_eq!(chars.get("中"), 1);
        assert_eq!(chars.get("文"), 1);
        assert_eq!(chars.total(), 7);
    }

    #[test]
    fn from_iter_sums_and_drops_zero() {
        let table: FrequencyTable = vec![
            ("x".to_string(), 2),
            ("y".to_string(), 0),
            ("x".to_string(), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.get("x"), 3);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn serde_roundtrip() {
        let table = FrequencyTable::from_text("alpha beta alpha");
        let json = serde_json::to_string(&table).unwrap();
        let back: FrequencyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
