//! Mood classification

use domain::{MoodCategory, MoodThresholds};

/// Classify a score against an explicit threshold pair
///
/// `score > positive` is positive, `score < negative` is negative and
/// everything else, including either boundary and NaN, is neutral.
#[must_use]
pub fn classify_mood(score: f64, positive_threshold: f64, negative_threshold: f64) -> MoodCategory {
    MoodCategory::classify(score, positive_threshold, negative_threshold)
}

/// Classifier bound to one threshold pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoodClassifier {
    thresholds: MoodThresholds,
}

impl MoodClassifier {
    #[must_use]
    pub const fn new(thresholds: MoodThresholds) -> Self {
        Self { thresholds }
    }

    /// Classifier for free-text mood entries
    #[must_use]
    pub const fn dashboard() -> Self {
        Self::new(MoodThresholds::DASHBOARD)
    }

    /// Classifier for the combined text of a task list
    #[must_use]
    pub const fn task_analysis() -> Self {
        Self::new(MoodThresholds::TASK_ANALYSIS)
    }

    #[must_use]
    pub const fn thresholds(&self) -> MoodThresholds {
        self.thresholds
    }

    #[must_use]
    pub fn classify(&self, score: f64) -> MoodCategory {
        self.thresholds.classify(score)
    }
}
