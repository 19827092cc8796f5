//! Sentiment service configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Cloud Natural Language settings
#[derive(Clone, Serialize, Deserialize)]
pub struct SentimentAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (sensitive - prefer env var PANDA_SENTIMENT__API_KEY)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// BCP-47 language hint sent with every document
    #[serde(default = "default_language")]
    pub language: Option<String>,
}

impl std::fmt::Debug for SentimentAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
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

#[allow(clippy::unnecessary_wraps)]
fn default_language() -> Option<String> {
    Some("en".to_string())
}

impl Default for SentimentAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            language: default_language(),
        }
    }
}

impl SentimentAppConfig {
    /// Whether a non-blank API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Convert to `integration_sentiment`'s `SentimentClientConfig`
    #[must_use]
    pub fn to_client_config(&self) -> integration_sentiment::SentimentClientConfig {
        integration_sentiment::SentimentClientConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
            language: self.language.clone().filter(|l| !l.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SentimentAppConfig::default();
        assert_eq!(config.base_url, "https://language.googleapis.com/v1");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.language.as_deref(), Some("en"));
        assert!(!config.has_api_key());
    }

    #[test]
    fn debug_redacts_key() {
        let config = SentimentAppConfig {
            api_key: Some(SecretString::from("super-secret")),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn key_is_never_serialized() {
        let config = SentimentAppConfig {
            api_key: Some(SecretString::from("super-secret")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn converts_to_client_config() {
        let config = SentimentAppConfig {
            base_url: "http://localhost:9000".to_string(),
            api_key: Some(SecretString::from("k")),
            timeout_secs: 5,
            language: Some(String::new()),
        };
        let client = config.to_client_config();
        assert_eq!(client.base_url, "http://localhost:9000");
        assert_eq!(client.api_key.as_deref(), Some("k"));
        assert_eq!(client.timeout_secs, 5);
        // blank hint lets the service detect the language
        assert!(client.language.is_none());
    }

    #[test]
    fn blank_key_is_not_configured() {
        let config = SentimentAppConfig {
            api_key: Some(SecretString::from("   ")),
            ..Default::default()
        };
        assert!(!config.has_api_key());
    }
}
