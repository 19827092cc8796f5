//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports over the sentiment integration and
//! provides configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::SentimentAdapter;
pub use config::{AppConfig, MoodAppConfig, SentimentAppConfig, ThresholdConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
