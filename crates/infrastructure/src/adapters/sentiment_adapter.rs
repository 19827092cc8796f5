//! Sentiment adapter - Implements SentimentPort using integration_sentiment

use std::sync::Arc;

use application::{error::ApplicationError, ports::SentimentPort};
use async_trait::async_trait;
use domain::{SentenceSentiment, SentimentResult};
use integration_sentiment::{
    DocumentSentiment, GoogleNlpClient, SentimentClient, SentimentClientConfig,
    SentimentClientError,
};
use tracing::{debug, instrument};

/// Adapter for the Cloud Natural Language sentiment service
pub struct SentimentAdapter {
    client: Arc<dyn SentimentClient>,
}

impl std::fmt::Debug for SentimentAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAdapter")
            .field("client", &"SentimentClient")
            .finish()
    }
}

impl SentimentAdapter {
    /// Create an adapter backed by the HTTP client
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no API key is set, or an internal
    /// error if the HTTP client fails to initialize.
    pub fn new(config: SentimentClientConfig) -> Result<Self, ApplicationError> {
        let client = GoogleNlpClient::new(config).map_err(|e| match e {
            SentimentClientError::MissingApiKey => ApplicationError::Configuration(
                "sentiment.api_key is required (set PANDA_SENTIMENT__API_KEY)".into(),
            ),
            other => ApplicationError::Internal(other.to_string()),
        })?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Wrap an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn SentimentClient>) -> Self {
        Self { client }
    }

    /// Transient failures stay retryable, everything else is a rejection
    fn map_error(err: &SentimentClientError) -> ApplicationError {
        if err.is_transient() {
            ApplicationError::SentimentService(err.to_string())
        } else {
            ApplicationError::SentimentRejected(err.to_string())
        }
    }

    /// Convert the client document into the domain result
    ///
    /// Out-of-range numbers are an upstream fault, not a caller mistake.
    fn to_result(document: DocumentSentiment) -> Result<SentimentResult, ApplicationError> {
        let invalid =
            |e: domain::DomainError| ApplicationError::sentiment(format!("invalid response: {e}"));

        let sentences = document
            .sentences
            .into_iter()
            .map(|s| SentenceSentiment::new(s.content, s.score, s.magnitude))
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;

        SentimentResult::new(document.score, document.magnitude, sentences).map_err(invalid)
    }
}

#[async_trait]
impl SentimentPort for SentimentAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn analyze(&self, text: &str) -> Result<SentimentResult, ApplicationError> {
        let document = self
            .client
            .analyze_sentiment(text)
            .await
            .map_err(|e| Self::map_error(&e))?;

        debug!(score = document.score, "Received sentiment from upstream");
        Self::to_result(document)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
