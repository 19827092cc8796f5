//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed input reached the core
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A sentiment score or magnitude was outside its allowed range
    #[error("Invalid {field}: {value}")]
    InvalidScore { field: &'static str, value: f64 },

    /// Threshold pair cannot classify consistently
    #[error("Invalid mood thresholds: positive {positive}, negative {negative}")]
    InvalidThresholds { positive: f64, negative: f64 },
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}
