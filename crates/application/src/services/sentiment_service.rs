//! Sentiment scoring on top of the sentiment port
//!
//! The port call and the score overrides are kept apart: `score` returns
//! exactly what the upstream capability said, `ScoreOverrides::apply`
//! post-processes the extracted overall score.

use std::{collections::BTreeMap, fmt, sync::Arc};

use domain::{DomainError, SentimentResult};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::SentimentPort, services::text_normalizer::tokenize};

/// Score forced for the normalized text `"ok"`
///
/// The upstream service rates the bare word as slightly negative or
/// neutral; users mean it as mildly positive.
pub const OK_SCORE_OVERRIDE: f64 = 0.1;

/// Manual corrections keyed by exact normalized text
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOverrides {
    overrides: BTreeMap<String, f64>,
}

impl Default for ScoreOverrides {
    fn default() -> Self {
        Self::none().with("ok", OK_SCORE_OVERRIDE)
    }
}

impl ScoreOverrides {
    /// No corrections at all
    #[must_use]
    pub const fn none() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Build from a map of normalized text to forced score
    pub fn from_map<I, K>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut overrides = BTreeMap::new();
        for (text, score) in entries {
            if !score.is_finite() || !(-1.0..=1.0).contains(&score) {
                return Err(DomainError::InvalidScore {
                    field: "score override",
                    value: score,
                });
            }
            overrides.insert(text.into(), score);
        }
        Ok(Self { overrides })
    }

    #[must_use]
    fn with(mut self, text: &str, score: f64) -> Self {
        self.overrides.insert(text.to_string(), score);
        self
    }

    /// Forced score for the text, if any
    #[must_use]
    pub fn get(&self, normalized_text: &str) -> Option<f64> {
        self.overrides.get(normalized_text).copied()
    }

    /// Effective score for a text whose extracted score is `score`
    #[must_use]
    pub fn apply(&self, normalized_text: &str, score: f64) -> f64 {
        self.get(normalized_text).unwrap_or(score)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

/// Service wrapping the sentiment port
pub struct SentimentService {
    port: Arc<dyn SentimentPort>,
    overrides: ScoreOverrides,
}

impl fmt::Debug for SentimentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentService")
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}

impl SentimentService {
    /// Create a service with the default overrides
    pub fn new(port: Arc<dyn SentimentPort>) -> Self {
        Self {
            port,
            overrides: ScoreOverrides::default(),
        }
    }

    /// Replace the score overrides
    #[must_use]
    pub fn with_overrides(mut self, overrides: ScoreOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    #[must_use]
    pub const fn overrides(&self) -> &ScoreOverrides {
        &self.overrides
    }

    /// Score already-normalized text
    ///
    /// One upstream call per invocation; nothing is cached or retried.
    #[instrument(skip(self, normalized_text), fields(text_len = normalized_text.len()))]
    pub async fn score(&self, normalized_text: &str) -> Result<SentimentResult, ApplicationError> {
        let result = self.port.analyze(normalized_text).await?;

        debug!(
            score = result.overall_score(),
            magnitude = result.overall_magnitude(),
            sentences = result.sentences().len(),
            "Sentiment scored"
        );

        Ok(result)
    }

    /// Overall score of a result after applying the overrides
    #[must_use]
    pub fn effective_score(&self, normalized_text: &str, result: &SentimentResult) -> f64 {
        let score = self.overrides.apply(normalized_text, result.overall_score());
        if self.overrides.get(normalized_text).is_some() {
            debug!(
                upstream = result.overall_score(),
                effective = score,
                "Score override applied"
            );
        }
        score
    }

    /// Check if the sentiment capability is reachable
    pub async fn is_available(&self) -> bool {
        self.port.is_available().await
    }

    /// Word tokens of every scored sentence, in document order
    #[must_use]
    pub fn extract_keywords(result: &SentimentResult) -> Vec<String> {
        result
            .sentences()
            .iter()
            .flat_map(|sentence| tokenize(sentence.content()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockSentimentPort;
    use domain::SentenceSentiment;

    fn result(score: f64) -> SentimentResult {
        SentimentResult::new(score, 0.5, []).unwrap()
    }

    #[test]
    fn default_overrides_contain_ok() {
        let overrides = ScoreOverrides::default();
        assert_eq!(overrides.get("ok"), Some(OK_SCORE_OVERRIDE));
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn override_matches_exact_text_only() {
        let overrides = ScoreOverrides::default();
        assert!((overrides.apply("ok", -0.2) - 0.1).abs() < f64::EPSILON);
        assert!((overrides.apply("ok fine", -0.2) + 0.2).abs() < f64::EPSILON);
        assert!((overrides.apply("", 0.3) - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn no_overrides_passes_through() {
        let overrides = ScoreOverrides::none();
        assert!(overrides.is_empty());
        assert!((overrides.apply("ok", -0.2) + 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn from_map_rejects_out_of_range() {
        let err = ScoreOverrides::from_map([("meh", 1.5)]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidScore { .. }));
        assert!(ScoreOverrides::from_map([("meh", f64::NAN)]).is_err());
    }

    #[test]
    fn from_map_accepts_valid_entries() {
        let overrides = ScoreOverrides::from_map([("meh", -0.1), ("fine", 0.2)]).unwrap();
        assert_eq!(overrides.get("fine"), Some(0.2));
    }

    #[tokio::test]
    async fn score_returns_upstream_result_untouched() {
        let mut mock = MockSentimentPort::new();
        mock.expect_analyze()
            .withf(|text| text == "ok")
            .times(1)
            .returning(|_| Ok(result(-0.2)));

        let service = SentimentService::new(Arc::new(mock));
        let scored = service.score("ok").await.unwrap();

        assert!((scored.overall_score() + 0.2).abs() < f64::EPSILON);
        assert!((service.effective_score("ok", &scored) - 0.1).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn score_propagates_port_failure() {
        let mut mock = MockSentimentPort::new();
        mock.expect_analyze()
            .returning(|_| Err(ApplicationError::sentiment("unreachable")));

        let service = SentimentService::new(Arc::new(mock));
        let err = service.score("anything").await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn custom_overrides_replace_defaults() {
        let mock = MockSentimentPort::new();
        let service = SentimentService::new(Arc::new(mock))
            .with_overrides(ScoreOverrides::from_map([("meh", -0.1)]).unwrap());

        assert_eq!(service.overrides().get("ok"), None);
        assert!((service.effective_score("meh", &result(0.4)) + 0.1).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn availability_delegates_to_port() {
        let mut mock = MockSentimentPort::new();
        mock.expect_is_available().returning(|| false);

        let service = SentimentService::new(Arc::new(mock));
        assert!(!service.is_available().await);
    }

    #[test]
    fn keywords_come_from_sentence_content() {
        let result = SentimentResult::new(
            -0.6,
            1.2,
            [
                SentenceSentiment::new("feel stressed today", -0.6, 0.6).unwrap(),
                SentenceSentiment::new("deadline, again!", -0.5, 0.6).unwrap(),
            ],
        )
        .unwrap();

        assert_eq!(
            SentimentService::extract_keywords(&result),
            vec!["feel", "stressed", "today", "deadline", "again"]
        );
    }

    #[test]
    fn keywords_of_empty_result() {
        assert!(SentimentService::extract_keywords(&SentimentResult::neutral()).is_empty());
    }
}
