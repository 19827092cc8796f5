//! Cloud Natural Language sentiment client
//!
//! HTTP client for the `documents:analyzeSentiment` REST method.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    AnalyzeSentimentRequest, AnalyzeSentimentResponse, DocumentSentiment, ErrorResponse,
};

/// Sentiment client errors
#[derive(Debug, Error)]
pub enum SentimentClientError {
    /// Connection to the sentiment service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the sentiment service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The service refused the request
    #[error("Request rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Failed to parse response from sentiment service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// No API key configured
    #[error("Missing API key")]
    MissingApiKey,
}

impl SentimentClientError {
    /// Whether the same request may succeed later
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::ServiceUnavailable(_) | Self::RateLimitExceeded
        )
    }
}

/// Sentiment service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct SentimentClientConfig {
    /// API base URL (default: <https://language.googleapis.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// BCP-47 language hint; `None` lets the service detect it
    #[serde(default)]
    pub language: Option<String>,
}

impl std::fmt::Debug for SentimentClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentClientConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://language.googleapis.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for SentimentClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            language: None,
        }
    }
}

impl SentimentClientConfig {
    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the language hint
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Sentiment client trait for scoring text
#[async_trait]
pub trait SentimentClient: Send + Sync {
    /// Score a document
    async fn analyze_sentiment(&self, text: &str)
    -> Result<DocumentSentiment, SentimentClientError>;

    /// Check if the sentiment service is healthy
    async fn is_healthy(&self) -> bool;
}

/// Cloud Natural Language HTTP client implementation
pub struct GoogleNlpClient {
    client: Client,
    config: SentimentClientConfig,
    api_key: String,
}

impl std::fmt::Debug for GoogleNlpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleNlpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GoogleNlpClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`SentimentClientError::MissingApiKey`] without a non-empty
    /// key, or an error if the HTTP client cannot be initialized.
    pub fn new(config: SentimentClientConfig) -> Result<Self, SentimentClientError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(SentimentClientError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SentimentClientError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build the method URL
    fn analyze_url(&self) -> String {
        format!(
            "{}/documents:analyzeSentiment",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Map a transport error, dropping the URL since it carries the key
    fn map_send_error(e: reqwest::Error) -> SentimentClientError {
        let e = e.without_url();
        if e.is_connect() || e.is_timeout() {
            SentimentClientError::ConnectionFailed(e.to_string())
        } else {
            SentimentClientError::RequestFailed(e.to_string())
        }
    }

    /// Map a non-success status and its body onto an error
    fn map_status(status: StatusCode, body: &str) -> SentimentClientError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return SentimentClientError::RateLimitExceeded;
        }
        if status.is_server_error() {
            return SentimentClientError::ServiceUnavailable(format!("HTTP {status}"));
        }

        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));

        SentimentClientError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl SentimentClient for GoogleNlpClient {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn analyze_sentiment(
        &self,
        text: &str,
    ) -> Result<DocumentSentiment, SentimentClientError> {
        let endpoint = self.analyze_url();
        let mut url = reqwest::Url::parse(&endpoint)
            .map_err(|e| SentimentClientError::RequestFailed(format!("Invalid URL: {e}")))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let body = AnalyzeSentimentRequest::plain_text(text, self.config.language.as_deref());

        debug!(url = %endpoint, "Requesting sentiment analysis");

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status(status, &body));
        }

        let api_response: AnalyzeSentimentResponse = response
            .json()
            .await
            .map_err(|e| SentimentClientError::ParseError(e.without_url().to_string()))?;

        let document = api_response.into_document().ok_or_else(|| {
            SentimentClientError::ParseError("No document sentiment in response".to_string())
        })?;

        debug!(
            score = document.score,
            magnitude = document.magnitude,
            sentences = document.sentences.len(),
            "Sentiment analysis complete"
        );

        Ok(document)
    }

    async fn is_healthy(&self) -> bool {
        self.analyze_sentiment("ok").await.is_ok()
    }
}
