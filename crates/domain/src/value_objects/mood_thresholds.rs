//! Mood classification thresholds

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::MoodCategory;

/// Pair of thresholds used to classify a sentiment score
///
/// Different call sites historically used different pairs; both are kept
/// as named constants instead of being folded into one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ThresholdPair")]
pub struct MoodThresholds {
    positive: f64,
    negative: f64,
}

impl MoodThresholds {
    /// Thresholds used when analyzing free-text mood entries
    pub const DASHBOARD: Self = Self {
        positive: 0.3,
        negative: -0.3,
    };

    /// Thresholds used when analyzing a user's task list
    pub const TASK_ANALYSIS: Self = Self {
        positive: 0.25,
        negative: -0.25,
    };

    /// Create a threshold pair
    ///
    /// Both values must be finite, lie in `[-1, 1]`, and `negative <= positive`.
    pub fn new(positive: f64, negative: f64) -> Result<Self, DomainError> {
        let in_range = |v: f64| v.is_finite() && (-1.0..=1.0).contains(&v);
        if !in_range(positive) || !in_range(negative) || negative > positive {
            return Err(DomainError::InvalidThresholds { positive, negative });
        }
        Ok(Self { positive, negative })
    }

    /// Scores strictly above this are positive
    #[must_use]
    pub const fn positive(&self) -> f64 {
        self.positive
    }

    /// Scores strictly below this are negative
    #[must_use]
    pub const fn negative(&self) -> f64 {
        self.negative
    }

    /// Classify a score with these thresholds
    #[must_use]
    pub fn classify(&self, score: f64) -> MoodCategory {
        MoodCategory::classify(score, self.positive, self.negative)
    }
}

#[derive(Deserialize)]
struct ThresholdPair {
    positive: f64,
    negative: f64,
}

impl TryFrom<ThresholdPair> for MoodThresholds {
    type Error = DomainError;

    fn try_from(pair: ThresholdPair) -> Result<Self, Self::Error> {
        Self::new(pair.positive, pair.negative)
    }
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self::DASHBOARD
    }
}
