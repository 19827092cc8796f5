//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod sentiment_port;

#[cfg(test)]
pub use sentiment_port::MockSentimentPort;
pub use sentiment_port::SentimentPort;
