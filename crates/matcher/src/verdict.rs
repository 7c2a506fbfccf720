use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the `High` bucket.
pub const HIGH_THRESHOLD: f64 = 0.80;
/// Lower bound (inclusive) of the `Moderate` bucket.
pub const MODERATE_THRESHOLD: f64 = 0.50;
/// Lower bound (inclusive) of the `Slight` bucket.
pub const SLIGHT_THRESHOLD: f64 = 0.30;

/// Qualitative plagiarism verdict, ordered from least to most suspicious.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Low,
    Slight,
    Moderate,
    High,
}

impl Verdict {
    /// Short machine label.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::High => "high",
            Verdict::Moderate => "moderate",
            Verdict::Slight => "slight",
            Verdict::Low => "low",
        }
    }

    /// Human-readable description used in result records.
    pub fn description(self) -> &'static str {
        match self {
            Verdict::High => "high similarity / strong plagiarism suspicion",
            Verdict::Moderate => "moderate similarity / partial plagiarism possible",
            Verdict::Slight => "slight similarity / limited borrowing possible",
            Verdict::Low => "low similarity / plagiarism unlikely",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a similarity ratio to its verdict bucket.
///
/// Lower bounds are inclusive; NaN falls through to [`Verdict::Low`].
pub fn classify(similarity: f64) -> Verdict {
    if similarity >= HIGH_THRESHOLD {
        Verdict::High
    } else if similarity >= MODERATE_THRESHOLD {
        Verdict::Moderate
    } else if similarity >= SLIGHT_THRESHOLD {
        Verdict::Slight
    } else {
        Verdict::Low
    }
}
