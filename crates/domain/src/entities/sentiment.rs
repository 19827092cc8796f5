//! Sentiment analysis results

use serde::Serialize;

use crate::errors::DomainError;

fn check_score(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && (-1.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::InvalidScore { field, value })
    }
}

fn check_magnitude(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidScore { field, value })
    }
}

/// Sentiment of a single sentence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceSentiment {
    content: String,
    score: f64,
    magnitude: f64,
}

impl SentenceSentiment {
    /// Create a sentence sentiment, validating ranges
    pub fn new(content: impl Into<String>, score: f64, magnitude: f64) -> Result<Self, DomainError> {
        Ok(Self {
            content: content.into(),
            score: check_score("sentence score", score)?,
            magnitude: check_magnitude("sentence magnitude", magnitude)?,
        })
    }

    /// Sentence text as echoed by the sentiment service
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Score in `[-1, 1]`
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Non-negative emotional intensity
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

/// Structured result of scoring one text
///
/// Immutable once built. Sentences with blank content are dropped on
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    overall_score: f64,
    overall_magnitude: f64,
    sentences: Vec<SentenceSentiment>,
}

impl SentimentResult {
    /// Build a result from the overall sentiment and its sentences
    pub fn new(
        overall_score: f64,
        overall_magnitude: f64,
        sentences: impl IntoIterator<Item = SentenceSentiment>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            overall_score: check_score("score", overall_score)?,
            overall_magnitude: check_magnitude("magnitude", overall_magnitude)?,
            sentences: sentences
                .into_iter()
                .filter(|s| !s.content.trim().is_empty())
                .collect(),
        })
    }

    /// A neutral result with no sentences
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            overall_score: 0.0,
            overall_magnitude: 0.0,
            sentences: Vec::new(),
        }
    }

    /// Overall document score in `[-1, 1]`
    #[must_use]
    pub const fn overall_score(&self) -> f64 {
        self.overall_score
    }

    /// Overall document magnitude
    #[must_use]
    pub const fn overall_magnitude(&self) -> f64 {
        self.overall_magnitude
    }

    /// Per-sentence breakdown in document order
    #[must_use]
    pub fn sentences(&self) -> &[SentenceSentiment] {
        &self.sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_valid_result() {
        let result = SentimentResult::new(
            0.8,
            1.6,
            [
                SentenceSentiment::new("love it", 0.9, 0.9).unwrap(),
                SentenceSentiment::new("great", 0.7, 0.7).unwrap(),
            ],
        )
        .unwrap();

        assert!((result.overall_score() - 0.8).abs() < f64::EPSILON);
        assert!((result.overall_magnitude() - 1.6).abs() < f64::EPSILON);
        assert_eq!(result.sentences().len(), 2);
        assert_eq!(result.sentences()[1].content(), "great");
    }

    #[test]
    fn drops_blank_sentences() {
        let result = SentimentResult::new(
            0.1,
            0.2,
            [
                SentenceSentiment::new("", 0.0, 0.0).unwrap(),
                SentenceSentiment::new("  ", 0.0, 0.0).unwrap(),
                SentenceSentiment::new("fine", 0.1, 0.2).unwrap(),
            ],
        )
        .unwrap();

        assert_eq!(result.sentences().len(), 1);
        assert_eq!(result.sentences()[0].content(), "fine");
    }

    #[test]
    fn rejects_out_of_range_score() {
        assert!(SentimentResult::new(1.2, 0.0, []).is_err());
        assert!(SentimentResult::new(f64::NAN, 0.0, []).is_err());
        assert!(SentenceSentiment::new("x", -1.01, 0.0).is_err());
    }

    #[test]
    fn rejects_negative_magnitude() {
        assert!(SentimentResult::new(0.0, -0.1, []).is_err());
        assert!(SentenceSentiment::new("x", 0.0, -1.0).is_err());
    }

    #[test]
    fn boundaries_are_accepted() {
        assert!(SentimentResult::new(1.0, 0.0, []).is_ok());
        assert!(SentimentResult::new(-1.0, 0.0, []).is_ok());
    }

    #[test]
    fn neutral_is_empty() {
        let result = SentimentResult::neutral();
        assert!(result.overall_score().abs() < f64::EPSILON);
        assert!(result.sentences().is_empty());
    }
}
