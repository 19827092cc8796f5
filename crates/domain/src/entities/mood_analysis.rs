//! Mood analysis record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{MoodCategory, MoodThresholds};

/// Outcome of analyzing a piece of user text for mood
///
/// Field names serialize in camelCase so the record can be handed to a
/// document store unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysis {
    /// Text as submitted by the user
    pub input_text: String,
    /// Text after normalization, as sent for scoring
    pub normalized_text: String,
    /// Effective overall score after overrides
    pub sentiment_score: f64,
    /// Overall magnitude reported by the sentiment service
    pub magnitude: f64,
    /// Tokens extracted from the scored sentences
    pub keywords: Vec<String>,
    /// Classified mood
    pub mood_category: MoodCategory,
    /// Thresholds the category was derived with
    pub thresholds: MoodThresholds,
    /// When the analysis was produced
    pub analyzed_at: DateTime<Utc>,
}

impl MoodAnalysis {
    /// Whether the analysis classified a positive mood
    #[must_use]
    pub fn is_uplifted(&self) -> bool {
        self.mood_category == MoodCategory::Positive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MoodAnalysis {
        MoodAnalysis {
            input_text: "I am feeling very stressed out today.".to_string(),
            normalized_text: "feel stressed today".to_string(),
            sentiment_score: -0.8,
            magnitude: 0.8,
            keywords: vec!["feeling".to_string(), "stressed".to_string()],
            mood_category: MoodCategory::Negative,
            thresholds: MoodThresholds::DASHBOARD,
            analyzed_at: Utc::now(),
        }
    }

    #[test]
    fn serializes_document_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["inputText"], "I am feeling very stressed out today.");
        assert_eq!(value["sentimentScore"], -0.8);
        assert_eq!(value["moodCategory"], "negative");
        assert!(value["keywords"].is_array());
        assert!(value.get("analyzedAt").is_some());
    }

    #[test]
    fn roundtrips_through_json() {
        let analysis = sample();
        let json = serde_json::to_string(&analysis).unwrap();
        let parsed: MoodAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, analysis);
    }

    #[test]
    fn uplifted_only_when_positive() {
        let mut analysis = sample();
        assert!(!analysis.is_uplifted());
        analysis.mood_category = MoodCategory::Positive;
        assert!(analysis.is_uplifted());
    }
}
