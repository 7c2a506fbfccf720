//! Content digests for canonical token streams.
//!
//! The digest identifies *what was compared*: two inputs that tokenize to
//! the same stream share a digest even when their punctuation, spacing or
//! ASCII case differ.
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || token_0 || 0x20 || token_1 ...)
//! ```

use sha2::{Digest, Sha256};

/// Compute the canonical identity digest of a token stream.
pub fn hash_token_stream<I, S>(canonical_version: u32, tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hasher = Sha256::new();
    hasher.update(canonical_version.to_be_bytes());
    hasher.update([0]);
    for (idx, token) in tokens.into_iter().enumerate() {
        if idx > 0 {
            hasher.update([b' ']);
        }
        hasher.update(token.as_ref().as_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_digest_depends_on_version_and_boundaries() {
        let a = hash_token_stream(1, ["ab", "c"]);
        let b = hash_token_stream(1, ["a", "bc"]);
        let c = hash_token_stream(2, ["ab", "c"]);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, hash_token_stream(1, vec!["ab".to_string(), "c".to_string()]));
        assert_eq!(a.len(), 64);
    }
}
