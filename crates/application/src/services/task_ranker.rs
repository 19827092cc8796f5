//! Task ordering and selection by mood
//!
//! Two independent policies live here. [`rank_tasks`] reorders the whole
//! list by priority and sentiment depending on the sign of the mood
//! score. [`select_matching_tasks`] keeps only the tasks whose sentiment
//! sign matches the mood category.

use std::{cmp::Ordering, sync::Arc};

use domain::{MoodCategory, Task};
use tracing::{debug, instrument, warn};

use crate::services::{SentimentService, TextNormalizer};

/// Reorder scored tasks for a mood score
///
/// - `mood_score > 0`: priority descending, ties by sentiment descending
/// - `mood_score < 0`: priority ascending, ties by sentiment descending
/// - otherwise (zero or NaN): priority descending, sentiment ignored
///
/// The sort is stable and the input is left untouched. Unscored tasks
/// count as sentiment 0.
#[must_use]
pub fn rank_tasks(tasks: &[Task], mood_score: f64) -> Vec<Task> {
    let mut ranked = tasks.to_vec();

    if mood_score > 0.0 {
        ranked.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| by_sentiment_descending(a, b))
        });
    } else if mood_score < 0.0 {
        ranked.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| by_sentiment_descending(a, b))
        });
    } else {
        ranked.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    ranked
}

/// Keep tasks whose sentiment sign matches the mood category
///
/// Positive mood keeps `score > 0`, negative keeps `score < 0`, neutral
/// keeps exactly `0`. Unscored tasks count as 0; a NaN score never matches.
#[must_use]
pub fn select_matching_tasks(mood: MoodCategory, tasks: &[Task]) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| {
            let score = task.sentiment_or_neutral();
            match mood {
                MoodCategory::Positive => score > 0.0,
                MoodCategory::Negative => score < 0.0,
                MoodCategory::Neutral => score == 0.0,
            }
        })
        .cloned()
        .collect()
}

fn by_sentiment_descending(a: &Task, b: &Task) -> Ordering {
    // +0.0 folds -0.0 so both zeros tie
    let (a, b) = (a.sentiment_or_neutral() + 0.0, b.sentiment_or_neutral() + 0.0);
    b.total_cmp(&a)
}

/// Scores task descriptions and applies the ordering policies
#[derive(Debug, Clone)]
pub struct TaskRanker {
    normalizer: TextNormalizer,
    sentiment: Arc<SentimentService>,
}

impl TaskRanker {
    pub fn new(normalizer: TextNormalizer, sentiment: Arc<SentimentService>) -> Self {
        Self {
            normalizer,
            sentiment,
        }
    }

    /// Annotate every task with the sentiment of its normalized description
    ///
    /// Tasks are scored one after another in input order, one call per task
    /// even when descriptions repeat. A failed call degrades that task to 0
    /// instead of failing the list. A description that normalizes to an
    /// empty string is still sent; the Cloud Natural Language API rejects
    /// empty documents, so such a task ends up at 0.
    #[instrument(skip(self, tasks), fields(task_count = tasks.len()))]
    pub async fn score_tasks(&self, tasks: &[Task]) -> Vec<Task> {
        let mut scored = Vec::with_capacity(tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            let normalized = self.normalizer.normalize(&task.description);
            let score = match self.sentiment.score(&normalized).await {
                Ok(result) => result.overall_score(),
                Err(e) => {
                    warn!(task = index, error = %e, "Task sentiment failed, scoring as neutral");
                    0.0
                },
            };
            scored.push(task.clone().with_sentiment_score(score));
        }

        debug!(scored = scored.len(), "Tasks scored");
        scored
    }

    /// Score the tasks and reorder them for the mood score
    pub async fn rank(&self, tasks: &[Task], mood_score: f64) -> Vec<Task> {
        if tasks.is_empty() {
            return Vec::new();
        }
        let scored = self.score_tasks(tasks).await;
        rank_tasks(&scored, mood_score)
    }

    /// Score the tasks and keep the ones matching the mood category
    pub async fn select_matching(&self, mood: MoodCategory, tasks: &[Task]) -> Vec<Task> {
        if tasks.is_empty() {
            return Vec::new();
        }
        let scored = self.score_tasks(tasks).await;
        select_matching_tasks(mood, &scored)
    }
}
