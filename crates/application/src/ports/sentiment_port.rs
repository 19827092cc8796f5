//! Sentiment capability port
//!
//! Defines the interface to whatever scores text for sentiment. The
//! infrastructure layer provides an HTTP-backed adapter.

use async_trait::async_trait;
use domain::SentimentResult;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for sentiment scoring
///
/// Implementations must not retry on their own. A transient failure is
/// reported as [`ApplicationError::SentimentService`], a refused request as
/// [`ApplicationError::SentimentRejected`], and the caller decides.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SentimentPort: Send + Sync {
    /// Score a UTF-8 text
    async fn analyze(&self, text: &str) -> Result<SentimentResult, ApplicationError>;

    /// Check if the sentiment capability is reachable
    async fn is_available(&self) -> bool;
}
