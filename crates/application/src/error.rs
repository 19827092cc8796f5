//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Malformed input reaching the core
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Upstream sentiment capability unreachable or temporarily failing
    #[error("Sentiment service error: {0}")]
    SentimentService(String),

    /// Upstream sentiment capability refused the request; resending it will not help
    #[error("Sentiment request rejected: {0}")]
    SentimentRejected(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a sentiment service error
    pub fn sentiment(msg: impl Into<String>) -> Self {
        Self::SentimentService(msg.into())
    }

    /// Check if this error is retryable
    ///
    /// Nothing in the core retries; callers use this to pick their policy.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::SentimentService(_))
    }

    /// Whether the sentiment capability failed, retryable or not
    #[must_use]
    pub const fn is_sentiment_failure(&self) -> bool {
        matches!(self, Self::SentimentService(_) | Self::SentimentRejected(_))
    }

    /// Whether the error stems from invalid caller input
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
