//! End-to-end task recommendation for a task list
//!
//! Derives the user's mood from the combined task descriptions, scores
//! every task and applies the chosen selection policy. When the mood
//! filter keeps nothing the generic fallback tasks are returned instead.

use std::{fmt, str::FromStr, sync::Arc};

use domain::{DomainError, MoodAnalysis, MoodThresholds, Task};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    error::ApplicationError,
    services::{
        MoodClassifier, MoodService, SentimentService, TaskRanker, TextNormalizer,
        fallback_tasks, rank_tasks, select_matching_tasks,
    },
};

/// Which task-selection policy to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Keep only tasks whose sentiment sign matches the mood
    #[default]
    MatchMood,
    /// Reorder all tasks by priority and sentiment
    Rank,
}

impl SelectionPolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MatchMood => "match-mood",
            Self::Rank => "rank",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "match-mood" => Ok(Self::MatchMood),
            "rank" => Ok(Self::Rank),
            other => Err(DomainError::validation(format!(
                "unknown selection policy: {other}"
            ))),
        }
    }
}

/// Outcome of a recommendation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecommendation {
    /// Mood derived from the combined task descriptions
    pub mood: MoodAnalysis,
    /// Recommended tasks, annotated with sentiment unless they are fallbacks
    pub tasks: Vec<Task>,
    /// Whether `tasks` is the generic fallback list
    pub used_fallback: bool,
    pub policy: SelectionPolicy,
}

/// Analyze-tasks use case
#[derive(Debug, Clone)]
pub struct TaskRecommendationService {
    mood: MoodService,
    ranker: TaskRanker,
}

impl TaskRecommendationService {
    /// Create the service using the task-analysis thresholds
    pub fn new(normalizer: TextNormalizer, sentiment: Arc<SentimentService>) -> Self {
        Self {
            mood: MoodService::new(normalizer.clone(), Arc::clone(&sentiment))
                .with_classifier(MoodClassifier::task_analysis()),
            ranker: TaskRanker::new(normalizer, sentiment),
        }
    }

    /// Classify the combined mood with different thresholds
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: MoodThresholds) -> Self {
        self.mood = self.mood.with_classifier(MoodClassifier::new(thresholds));
        self
    }

    /// Recommend tasks for a validated, non-empty task list
    ///
    /// A failure while deriving the mood fails the request; a failure
    /// scoring a single task only neutralizes that task.
    #[instrument(skip(self, tasks), fields(task_count = tasks.len(), policy = %policy))]
    pub async fn recommend(
        &self,
        tasks: &[Task],
        policy: SelectionPolicy,
    ) -> Result<TaskRecommendation, ApplicationError> {
        if tasks.is_empty() {
            return Err(DomainError::validation("at least one task is required").into());
        }

        let combined = tasks
            .iter()
            .map(|task| task.description.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let mood = self.mood.analyze_mood(&combined).await?;

        let scored = self.ranker.score_tasks(tasks).await;
        let selected = match policy {
            SelectionPolicy::MatchMood => select_matching_tasks(mood.mood_category, &scored),
            SelectionPolicy::Rank => rank_tasks(&scored, mood.sentiment_score),
        };

        let used_fallback = selected.is_empty();
        let tasks = if used_fallback {
            fallback_tasks()
        } else {
            selected
        };

        info!(
            mood = %mood.mood_category,
            recommended = tasks.len(),
            used_fallback,
            "Tasks recommended"
        );

        Ok(TaskRecommendation {
            mood,
            tasks,
            used_fallback,
            policy,
        })
    }
}
