//! Task entity

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DomainError;
use crate::value_objects::Priority;

/// A user task as seen by the ranking policies
///
/// Owned by the caller. Ranking only reads `description` and `priority`
/// and fills in `sentiment_score` as a derived annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Free-text description of the task
    pub description: String,
    /// Task priority (defaults to 0)
    #[serde(default)]
    pub priority: Priority,
    /// Sentiment of the normalized description, once scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
}

impl Task {
    /// Create an unscored task with default priority
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            priority: Priority::UNSET,
            sentiment_score: None,
        }
    }

    /// Set the priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Annotate with a computed sentiment score
    #[must_use]
    pub const fn with_sentiment_score(mut self, score: f64) -> Self {
        self.sentiment_score = Some(score);
        self
    }

    /// Sentiment score, treating an unscored task as neutral
    #[must_use]
    pub fn sentiment_or_neutral(&self) -> f64 {
        self.sentiment_score.unwrap_or(0.0)
    }

    /// Parse a task list from an untyped JSON value
    ///
    /// The value must be an array of objects, each with a string
    /// `description` and an optional finite numeric `priority`. Any
    /// violation rejects the whole list.
    pub fn list_from_json(value: &Value) -> Result<Vec<Self>, DomainError> {
        let items = value
            .as_array()
            .ok_or_else(|| DomainError::validation("tasks must be a list"))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| Self::from_json_item(index, item))
            .collect()
    }

    fn from_json_item(index: usize, item: &Value) -> Result<Self, DomainError> {
        let object = item
            .as_object()
            .ok_or_else(|| DomainError::validation(format!("task {index} must be an object")))?;

        let description = match object.get("description") {
            Some(Value::String(text)) => text.clone(),
            Some(_) => {
                return Err(DomainError::validation(format!(
                    "task {index}: description must be a string"
                )));
            },
            None => {
                return Err(DomainError::validation(format!(
                    "task {index}: description is required"
                )));
            },
        };

        let priority = match object.get("priority") {
            None | Some(Value::Null) => Priority::UNSET,
            Some(value) => {
                let number = value.as_f64().ok_or_else(|| {
                    DomainError::validation(format!("task {index}: priority must be a number"))
                })?;
                Priority::new(number)
                    .map_err(|e| DomainError::validation(format!("task {index}: {e}")))?
            },
        };

        Ok(Self::new(description).with_priority(priority))
    }
}
