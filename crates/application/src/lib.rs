//! Application layer - Use cases and orchestration
//!
//! Holds the text normalizer, the sentiment port and the services that
//! turn sentiment into moods and task recommendations. Infrastructure
//! adapters implement the ports defined here.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
