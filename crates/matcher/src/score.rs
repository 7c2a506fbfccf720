//! Distance and similarity scorers.

use canonical::FrequencyTable;
use perceptual::FINGERPRINT_BITS;

/// Number of differing bits between two fingerprints, in `[0, 64]`.
#[inline]
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

/// `1 - distance / width`, clamped to `[0.0, 1.0]`.
///
/// A zero width has no bits that could differ and scores 1.0.
#[inline]
pub fn similarity(distance: u32, width: u32) -> f64 {
    if width == 0 {
        return 1.0;
    }
    let distance = distance.min(width);
    1.0 - f64::from(distance) / f64::from(width)
}

/// [`similarity`] for 64-bit fingerprints.
#[inline]
pub fn similarity64(distance: u32) -> f64 {
    similarity(distance, FINGERPRINT_BITS)
}

/// Cosine similarity between two frequency vectors.
///
/// Either side being empty (zero norm) scores 0.0, including empty vs empty.
pub fn cosine_similarity(a: &FrequencyTable, b: &FrequencyTable) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut dot = 0.0f64;
    for (token, count) in small.iter() {
        let other = large.get(token);
        if other != 0 {
            dot += f64::from(count) * f64::from(other);
        }
    }
    let norm_a: f64 = a.iter().map(|(_, c)| f64::from(c) * f64::from(c)).sum();
    let norm_b: f64 = b.iter().map(|(_, c)| f64::from(c) * f64::from(c)).sum();

    let denom = (norm_a * norm_b).sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    (dot / denom).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn hamming_basics() {
        assert_eq!(hamming_distance(0, 0), 0);
        assert_eq!(hamming_distance(u64::MAX, 0), 64);
        assert_eq!(hamming_distance(0b1011, 0b0001), 2);
        assert_eq!(hamming_distance(0xdead_beef, 0xdead_beef), 0);
    }

    #[test]
    fn hamming_is_symmetric() {
        let pairs = [(1u64, 2u64), (0x7272_736a_9876_690e, 0x2b606), (u64::MAX, 12345)];
        for (a, b) in pairs {
            assert_eq!(hamming_distance(a, b), hamming_distance(b, a));
        }
    }

    #[test]
    fn similarity_range_and_endpoints() {
        assert_eq!(similarity64(0), 1.0);
        assert_eq!(similarity64(64), 0.0);
        assert_eq!(similarity64(16), 0.75);
        assert_eq!(similarity64(100), 0.0);
        assert_eq!(similarity(3, 4), 0.25);
        assert_eq!(similarity(0, 0), 1.0);
        for d in 0..=64 {
            let s = similarity64(d);
            assert!((0.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn cosine_identical_tables_score_one() {
        let t = FrequencyTable::from_text("a b b c c c 中文");
        assert!((cosine_similarity(&t, &t) - 1.0).abs() < EPS);
    }

    #[test]
    fn cosine_disjoint_tables_score_zero() {
        let a = FrequencyTable::from_text("alpha beta");
        let b = FrequencyTable::from_text("gamma delta");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn cosine_empty_side_scores_zero() {
        let empty = FrequencyTable::default();
        let t = FrequencyTable::from_text("alpha");
        assert_eq!(cosine_similarity(&empty, &t), 0.0);
        assert_eq!(cosine_similarity(&t, &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn cosine_known_value_and_symmetry() {
        // a = (1, 1), b = (1, 0) over {x, y}: cos = 1 / sqrt(2)
        let a = FrequencyTable::from_text("x y");
        let b = FrequencyTable::from_text("x");
        let expected = 1.0 / 2f64.sqrt();
        assert!((cosine_similarity(&a, &b) - expected).abs() < EPS);
        assert!((cosine_similarity(&b, &a) - expected).abs() < EPS);
    }
}
