//! Mood classification configuration

use std::collections::BTreeMap;

use application::{ApplicationError, OK_SCORE_OVERRIDE, ScoreOverrides};
use domain::{DomainError, MoodThresholds};
use serde::{Deserialize, Serialize};

/// Positive/negative threshold pair as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub positive: f64,
    pub negative: f64,
}

impl ThresholdConfig {
    #[must_use]
    pub const fn from_thresholds(thresholds: MoodThresholds) -> Self {
        Self {
            positive: thresholds.positive(),
            negative: thresholds.negative(),
        }
    }

    /// Validate into domain thresholds
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidThresholds`] for non-finite, out of range
    /// or inverted values.
    pub fn to_thresholds(&self) -> Result<MoodThresholds, DomainError> {
        MoodThresholds::new(self.positive, self.negative)
    }
}

/// Thresholds and score corrections for mood analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAppConfig {
    /// Thresholds for free-text mood entries (default: 0.3 / -0.3)
    #[serde(default = "default_dashboard")]
    pub dashboard: ThresholdConfig,

    /// Thresholds for task-list analysis (default: 0.25 / -0.25)
    #[serde(default = "default_task_analysis")]
    pub task_analysis: ThresholdConfig,

    /// Normalized text mapped to a forced overall score
    ///
    /// A table in the config file replaces the defaults entirely.
    #[serde(default = "default_score_overrides")]
    pub score_overrides: BTreeMap<String, f64>,
}

const fn default_dashboard() -> ThresholdConfig {
    ThresholdConfig::from_thresholds(MoodThresholds::DASHBOARD)
}

const fn default_task_analysis() -> ThresholdConfig {
    ThresholdConfig::from_thresholds(MoodThresholds::TASK_ANALYSIS)
}

fn default_score_overrides() -> BTreeMap<String, f64> {
    BTreeMap::from([("ok".to_string(), OK_SCORE_OVERRIDE)])
}

impl Default for MoodAppConfig {
    fn default() -> Self {
        Self {
            dashboard: default_dashboard(),
            task_analysis: default_task_analysis(),
            score_overrides: default_score_overrides(),
        }
    }
}

fn invalid(section: &str, err: &DomainError) -> ApplicationError {
    ApplicationError::Configuration(format!("mood.{section}: {err}"))
}

impl MoodAppConfig {
    /// Validated dashboard thresholds
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the section on invalid values.
    pub fn dashboard_thresholds(&self) -> Result<MoodThresholds, ApplicationError> {
        self.dashboard
            .to_thresholds()
            .map_err(|e| invalid("dashboard", &e))
    }

    /// Validated task-analysis thresholds
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the section on invalid values.
    pub fn task_analysis_thresholds(&self) -> Result<MoodThresholds, ApplicationError> {
        self.task_analysis
            .to_thresholds()
            .map_err(|e| invalid("task_analysis", &e))
    }

    /// Validated score overrides
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any forced score is outside `[-1, 1]`.
    pub fn to_score_overrides(&self) -> Result<ScoreOverrides, ApplicationError> {
        ScoreOverrides::from_map(
            self.score_overrides
                .iter()
                .map(|(text, score)| (text.as_str(), *score)),
        )
        .map_err(|e| invalid("score_overrides", &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_named_thresholds() {
        let config = MoodAppConfig::default();
        assert_eq!(
            config.dashboard_thresholds().unwrap(),
            MoodThresholds::DASHBOARD
        );
        assert_eq!(
            config.task_analysis_thresholds().unwrap(),
            MoodThresholds::TASK_ANALYSIS
        );
        assert_eq!(
            config.to_score_overrides().unwrap(),
            ScoreOverrides::default()
        );
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let config = MoodAppConfig {
            dashboard: ThresholdConfig {
                positive: -0.5,
                negative: 0.5,
            },
            ..Default::default()
        };
        let err = config.dashboard_thresholds().unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(ref m) if m.contains("mood.dashboard")));
        assert!(config.task_analysis_thresholds().is_ok());
    }

    #[test]
    fn out_of_range_override_is_rejected() {
        let config = MoodAppConfig {
            score_overrides: BTreeMap::from([("meh".to_string(), 3.0)]),
            ..Default::default()
        };
        let err = config.to_score_overrides().unwrap_err();
        assert!(err.to_string().contains("score_overrides"));
    }

    #[test]
    fn empty_overrides_disable_corrections() {
        let config = MoodAppConfig {
            score_overrides: BTreeMap::new(),
            ..Default::default()
        };
        assert!(config.to_score_overrides().unwrap().is_empty());
    }

    #[test]
    fn deserializes_partial_section() {
        let config: MoodAppConfig =
            serde_json::from_str(r#"{"dashboard":{"positive":0.5,"negative":-0.1}}"#).unwrap();
        let thresholds = config.dashboard_thresholds().unwrap();
        assert!((thresholds.positive() - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.task_analysis, default_task_analysis());
        assert_eq!(config.score_overrides.get("ok"), Some(&OK_SCORE_OVERRIDE));
    }
}
