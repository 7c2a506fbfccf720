use canonical::{canonicalize, CanonicalizedDocument, FrequencyTable};
use perceptual::{perceptualize, SimHashConfig};
use tracing::{debug, Level};

use crate::score::{cosine_similarity, hamming_distance, similarity64};
use crate::types::{CosineUnit, MatchConfig, MatchError, MatchOutcome, MetricId};
use crate::verdict::classify;


/// Stateless comparison service holding explicit stage configs.
///
/// Every call is a pure function of its inputs and the configs captured at
/// construction, so one `Matcher` can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    simhash_cfg: SimHashConfig,
    match_cfg: MatchConfig,
}

impl Matcher {
    /// Construct a matcher from explicit configs, validating both.
    pub fn new(simhash_cfg: SimHashConfig, match_cfg: MatchConfig) -> Result<Self, MatchError> {
        simhash_cfg.validate()?;
        match_cfg.validate()?;
        Ok(Self {
            simhash_cfg,
            match_cfg,
        })
    }

    /// Compare two raw texts.
    pub fn compare_texts(&self, original: &str, candidate: &str) -> Result<MatchOutcome, MatchError> {
        let original = canonicalize("original", original)?;
        let candidate = canonicalize("candidate", candidate)?;
        self.compare_documents(&original, &candidate)
    }

    /// Compare two canonical documents with the configured metric.
    pub fn compare_documents(
        &self,
        original: &CanonicalizedDocument,
        candidate: &CanonicalizedDocument,
    ) -> Result<MatchOutcome, MatchError> {
        let span = tracing::span!(
            Level::DEBUG,
            "matcher.compare",
            original = %original.doc_id,
            candidate = %candidate.doc_id,
            metric = self.match_cfg.metric.as_str()
        );
        let _guard = span.enter();

        let outcome = match self.match_cfg.metric {
            MetricId::Hamming => self.compare_hamming(original, candidate)?,
            MetricId::Cosine => self.compare_cosine(original, candidate),
        };

        debug!(
            distance = ?outcome.distance,
            similarity = outcome.similarity,
            verdict = outcome.verdict.label(),
            "compare_complete"
        );
        Ok(outcome)
    }

    fn compare_hamming(
        &self,
        original: &CanonicalizedDocument,
        candidate: &CanonicalizedDocument,
    ) -> Result<MatchOutcome, MatchError> {
        let fp_original = perceptualize(&original.frequencies, &self.simhash_cfg)?;
        let fp_candidate = perceptualize(&candidate.frequencies, &self.simhash_cfg)?;

        let distance = hamming_distance(fp_original.simhash, fp_candidate.simhash);
        let similarity = similarity64(distance);

        Ok(MatchOutcome {
            metric: MetricId::Hamming,
            distance: Some(distance),
            similarity,
            verdict: classify(similarity),
            original: Some(fp_original),
            candidate: Some(fp_candidate),
        })
    }

    fn compare_cosine(
        &self,
        original: &CanonicalizedDocument,
        candidate: &CanonicalizedDocument,
    ) -> MatchOutcome {
        let similarity = match self.match_cfg.cosine_unit {
            CosineUnit::Token => cosine_similarity(&original.frequencies, &candidate.frequencies),
            CosineUnit::Char => {
                let a: FrequencyTable = original.frequencies.char_frequencies();
                let b: FrequencyTable = candidate.frequencies.char_frequencies();
                cosine_similarity(&a, &b)
            }
        };

        MatchOutcome {
            metric: MetricId::Cosine,
            distance: None,
            similarity,
            verdict: classify(similarity),
            original: None,
            candidate: None,
        }
    }
}
