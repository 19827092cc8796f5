//! Mood analysis of free text

use std::sync::Arc;

use chrono::Utc;
use domain::MoodAnalysis;
use tracing::{info, instrument};

use crate::{
    error::ApplicationError,
    services::{MoodClassifier, SentimentService, TextNormalizer},
};

/// Normalize, score and classify user text
#[derive(Debug, Clone)]
pub struct MoodService {
    normalizer: TextNormalizer,
    sentiment: Arc<SentimentService>,
    classifier: MoodClassifier,
}

impl MoodService {
    /// Create a mood service using the dashboard thresholds
    pub fn new(normalizer: TextNormalizer, sentiment: Arc<SentimentService>) -> Self {
        Self {
            normalizer,
            sentiment,
            classifier: MoodClassifier::dashboard(),
        }
    }

    /// Use a different classifier
    #[must_use]
    pub const fn with_classifier(mut self, classifier: MoodClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub const fn classifier(&self) -> &MoodClassifier {
        &self.classifier
    }

    /// Analyze the mood of a text
    ///
    /// Fails only when the sentiment capability fails. Text that normalizes
    /// to an empty string (for example "It is.") is still sent; the Cloud
    /// Natural Language API rejects empty documents, so that call fails.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn analyze_mood(&self, text: &str) -> Result<MoodAnalysis, ApplicationError> {
        let normalized_text = self.normalizer.normalize(text);
        let result = self.sentiment.score(&normalized_text).await?;
        let sentiment_score = self.sentiment.effective_score(&normalized_text, &result);
        let mood_category = self.classifier.classify(sentiment_score);

        info!(
            score = sentiment_score,
            magnitude = result.overall_magnitude(),
            mood = %mood_category,
            "Mood analyzed"
        );

        Ok(MoodAnalysis {
            input_text: text.to_string(),
            normalized_text,
            sentiment_score,
            magnitude: result.overall_magnitude(),
            keywords: SentimentService::extract_keywords(&result),
            mood_category,
            thresholds: self.classifier.thresholds(),
            analyzed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockSentimentPort;
    use domain::{MoodCategory, MoodThresholds, SentenceSentiment, SentimentResult};

    fn service(mock: MockSentimentPort) -> MoodService {
        MoodService::new(
            TextNormalizer::english(),
            Arc::new(SentimentService::new(Arc::new(mock))),
        )
    }

    #[tokio::test]
    async fn analyzes_negative_mood() {
        let mut mock = MockSentimentPort::new();
        mock.expect_analyze()
            .withf(|text| text == "feel stressed today")
            .times(1)
            .returning(|text| {
                Ok(SentimentResult::new(
                    -0.8,
                    0.8,
                    [SentenceSentiment::new(text, -0.8, 0.8).unwrap()],
                )
                .unwrap())
            });

        let analysis = service(mock)
            .analyze_mood("I am feeling very stressed out today.")
            .await
            .unwrap();

        assert_eq!(analysis.input_text, "I am feeling very stressed out today.");
        assert_eq!(analysis.normalized_text, "feel stressed today");
        assert_eq!(analysis.mood_category, MoodCategory::Negative);
        assert_eq!(analysis.keywords, vec!["feel", "stressed", "today"]);
        assert_eq!(analysis.thresholds, MoodThresholds::DASHBOARD);
        assert!(!analysis.is_uplifted());
    }

    #[tokio::test]
    async fn ok_override_lifts_score() {
        let mut mock = MockSentimentPort::new();
        mock.expect_analyze()
            .returning(|_| Ok(SentimentResult::new(-0.1, 0.1, []).unwrap()));

        let analysis = service(mock).analyze_mood("It's ok.").await.unwrap();

        assert_eq!(analysis.normalized_text, "ok");
        assert!((analysis.sentiment_score - 0.1).abs() < f64::EPSILON);
        // 0.1 stays under both thresholds
        assert_eq!(analysis.mood_category, MoodCategory::Neutral);
    }

    #[tokio::test]
    async fn classifier_thresholds_apply() {
        let mut mock = MockSentimentPort::new();
        mock.expect_analyze()
            .returning(|_| Ok(SentimentResult::new(0.28, 0.3, []).unwrap()));
        let service = service(mock);

        let dashboard = service.analyze_mood("nice").await.unwrap();
        assert_eq!(dashboard.mood_category, MoodCategory::Neutral);

        let task_analysis = service
            .with_classifier(MoodClassifier::task_analysis())
            .analyze_mood("nice")
            .await
            .unwrap();
        assert_eq!(task_analysis.mood_category, MoodCategory::Positive);
        assert_eq!(task_analysis.thresholds, MoodThresholds::TASK_ANALYSIS);
    }

    #[tokio::test]
    async fn propagates_sentiment_failure() {
        let mut mock = MockSentimentPort::new();
        mock.expect_analyze()
            .returning(|_| Err(ApplicationError::sentiment("quota exhausted")));

        let err = service(mock).analyze_mood("anything").await.unwrap_err();
        assert!(matches!(err, ApplicationError::SentimentService(_)));
    }

    #[tokio::test]
    async fn empty_normalized_text_is_still_sent() {
        let mut mock = MockSentimentPort::new();
        mock.expect_analyze()
            .withf(|text| text.is_empty())
            .times(1)
            .returning(|_| Err(ApplicationError::sentiment("document is empty")));

        let result = service(mock).analyze_mood("It is.").await;
        assert!(
            matches!(result, Err(ApplicationError::SentimentService(_))),
            "Expected SentimentService, got: {result:?}"
        );
    }
}
