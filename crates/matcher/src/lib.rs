//! # papercheck matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the canonical and perceptual layers. It turns a
//! pair of documents into a similarity score and a plagiarism verdict.
//!
//! ## Core Types
//!
//! - [`MetricId`]: selects the scoring strategy:
//!   - `Hamming`: 64-bit SimHash fingerprints, `1 - distance / 64`.
//!   - `Cosine`: cosine similarity over token (or character) frequencies.
//! - [`MatchConfig`]: metric selection plus the cosine vector unit.
//! - [`MatchOutcome`]: distance, similarity, verdict and fingerprints.
//! - [`Verdict`]: `High` / `Moderate` / `Slight` / `Low`.
//! - [`Matcher`]: stateless engine wiring the stages together.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{Matcher, MatchConfig, Verdict};
//! use perceptual::SimHashConfig;
//!
//! let matcher = Matcher::new(SimHashConfig::default(), MatchConfig::default()).unwrap();
//! let outcome = matcher.compare_texts("same words here", "Same words, here!").unwrap();
//!
//! assert_eq!(outcome.distance, Some(0));
//! assert_eq!(outcome.verdict, Verdict::High);
//! ```
//!
//! The free functions [`hamming_distance`], [`similarity`] and [`classify`]
//! are the building blocks and can be used without a `Matcher`.

pub mod engine;
pub mod score;
pub mod types;
pub mod verdict;

pub use crate::engine::Matcher;
pub use crate::score::{cosine_similarity, hamming_distance, similarity, similarity64};
pub use crate::types::{CosineUnit, MatchConfig, MatchError, MatchOutcome, MetricId};
pub use crate::verdict::{
    classify, Verdict, HIGH_THRESHOLD, MODERATE_THRESHOLD, SLIGHT_THRESHOLD,
};
