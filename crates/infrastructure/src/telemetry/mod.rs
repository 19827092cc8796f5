//! Logging initialization
//!
//! Logs go to stderr so command output on stdout stays machine readable.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "warn", "application=debug,integration_sentiment=info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit one JSON object per event instead of human-readable lines
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Raise the filter for each `-v` given on the command line
    ///
    /// Zero keeps the configured filter.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        let level = match verbosity {
            0 => return self,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        self.log_filter = level.to_string();
        self
    }

    /// Filter used when `RUST_LOG` is not set
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Filter`] if the directive string is malformed.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        EnvFilter::try_new(&self.log_filter)
            .map_err(|e| TelemetryError::Filter(format!("{}: {e}", self.log_filter)))
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the configured filter.
///
/// # Errors
///
/// Returns an error if the filter is malformed or a subscriber is already set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.env_filter()?,
    };

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    debug!(json = config.json_logs, "Logging initialized");
    Ok(())
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// Invalid filter directive
    #[error("Invalid log filter: {0}")]
    Filter(String),
}
