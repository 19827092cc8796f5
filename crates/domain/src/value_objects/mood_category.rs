//! Mood category value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Coarse three-way classification of a sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    /// Score strictly above the positive threshold
    Positive,
    /// Score strictly below the negative threshold
    Negative,
    /// Everything in between, including both boundaries
    #[default]
    Neutral,
}

impl MoodCategory {
    /// Classify a score against explicit thresholds
    ///
    /// Total over every `f64`: values equal to a threshold and `NaN`
    /// classify as [`MoodCategory::Neutral`].
    #[must_use]
    pub fn classify(score: f64, positive_threshold: f64, negative_threshold: f64) -> Self {
        if score > positive_threshold {
            Self::Positive
        } else if score < negative_threshold {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Lowercase label used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Get all categories
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Positive, Self::Negative, Self::Neutral]
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            other => Err(DomainError::validation(format!(
                "unknown mood category: {other}"
            ))),
        }
    }
}
