//! Application configuration
//!
//! Layered as serde defaults, then an optional TOML file, then environment
//! variables prefixed `PANDA_` with `__` between nested keys
//! (e.g. `PANDA_SENTIMENT__API_KEY`).

mod mood;
mod sentiment;

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use mood::{MoodAppConfig, ThresholdConfig};
pub use sentiment::SentimentAppConfig;

use crate::telemetry::TelemetryConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PANDA";

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Sentiment service connection
    #[serde(default)]
    pub sentiment: SentimentAppConfig,

    /// Mood thresholds and score corrections
    #[serde(default)]
    pub mood: MoodAppConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load from `config.toml` in the working directory (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_sources(
            config::File::with_name("config").required(false),
            Self::environment(),
        )
    }

    /// Load from an explicit file, which must exist, and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unparsable, or a value has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::from_sources(config::File::from(path).required(true), Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_sources<S>(file: S, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Effective configuration as JSON with secrets masked
    #[must_use]
    pub fn to_redacted_json(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Some(sentiment) = value.get_mut("sentiment").and_then(Value::as_object_mut) {
            let masked = if self.sentiment.has_api_key() {
                Value::from("[REDACTED]")
            } else {
                Value::Null
            };
            sentiment.insert("api_key".to_string(), masked);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::{collections::HashMap, io::Write};

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::environment().source(Some(source))
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn load(file: &tempfile::NamedTempFile, vars: &[(&str, &str)]) -> AppConfig {
        AppConfig::from_sources(config::File::from(file.path()), env(vars)).unwrap()
    }

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.sentiment.timeout_secs, 30);
        assert_eq!(config.mood, MoodAppConfig::default());
        assert_eq!(config.telemetry.log_filter, "warn");
        assert!(!config.telemetry.json_logs);
    }

    #[test]
    fn empty_sources_yield_defaults() {
        let file = toml_file("");
        let config = load(&file, &[]);
        assert_eq!(config.sentiment.base_url, "https://language.googleapis.com/v1");
        assert_eq!(config.sentiment.language.as_deref(), Some("en"));
        assert!(config.sentiment.api_key.is_none());
        assert_eq!(config.mood.score_overrides.get("ok"), Some(&0.1));
    }

    #[test]
    fn file_values_are_read() {
        let file = toml_file(
            r#"
[sentiment]
base_url = "http://localhost:8080"
api_key = "from-file"
timeout_secs = 5

[mood.dashboard]
positive = 0.4
negative = -0.2

[mood.score_overrides]
fine = 0.2

[telemetry]
log_filter = "debug"
json_logs = true
"#,
        );
        let config = load(&file, &[]);

        assert_eq!(config.sentiment.base_url, "http://localhost:8080");
        assert_eq!(
            config.sentiment.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("from-file".to_string())
        );
        assert_eq!(config.sentiment.timeout_secs, 5);
        assert!((config.mood.dashboard.positive - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.mood.task_analysis, ThresholdConfig::from_thresholds(domain::MoodThresholds::TASK_ANALYSIS));
        assert_eq!(config.mood.score_overrides.len(), 1);
        assert_eq!(config.mood.score_overrides.get("fine"), Some(&0.2));
        assert_eq!(config.telemetry.log_filter, "debug");
        assert!(config.telemetry.json_logs);
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file("[sentiment]\napi_key = \"from-file\"\ntimeout_secs = 5\n");
        let config = load(
            &file,
            &[
                ("PANDA_SENTIMENT__API_KEY", "from-env"),
                ("PANDA_SENTIMENT__TIMEOUT_SECS", "12"),
            ],
        );

        assert_eq!(
            config.sentiment.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("from-env".to_string())
        );
        assert_eq!(config.sentiment.timeout_secs, 12);
    }

    #[test]
    fn unrelated_environment_is_ignored() {
        let file = toml_file("");
        let config = load(&file, &[("OTHER_SENTIMENT__API_KEY", "nope")]);
        assert!(config.sentiment.api_key.is_none());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn wrong_type_is_an_error() {
        let file = toml_file("[sentiment]\ntimeout_secs = \"soon\"\n");
        let result = AppConfig::from_sources(config::File::from(file.path()), env(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn redacted_json_masks_key() {
        let file = toml_file("[sentiment]\napi_key = \"super-secret\"\n");
        let config = load(&file, &[]);
        let json = config.to_redacted_json();

        assert_eq!(json["sentiment"]["api_key"], "[REDACTED]");
        assert!(!json.to_string().contains("super-secret"));
        assert_eq!(json["mood"]["dashboard"]["positive"], 0.3);
    }

    #[test]
    fn redacted_json_without_key() {
        let json = AppConfig::default().to_redacted_json();
        assert!(json["sentiment"]["api_key"].is_null());
    }
}
