//! Task priority value object

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::errors::DomainError;

/// Numeric task priority
///
/// Larger values are more important. Unset priorities default to `0`.
/// Always finite, so the ordering is total.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Priority(f64);

impl Priority {
    /// The priority assigned to tasks that do not carry one
    pub const UNSET: Self = Self(0.0);

    /// Create a priority from a finite number
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "priority must be a finite number, got {value}"
            )));
        }
        // Folds -0.0 into 0.0 so equal priorities compare equal
        Ok(Self(value + 0.0))
    }

    /// Get the raw numeric value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Priority {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Priority> for f64 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
