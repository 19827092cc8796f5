//! Cloud Natural Language sentiment integration
//!
//! Client for the `documents:analyzeSentiment` method of the Google Cloud
//! Natural Language API (<https://cloud.google.com/natural-language>).
//! Authenticates with an API key.

pub mod client;
mod models;

pub use client::{GoogleNlpClient, SentimentClient, SentimentClientConfig, SentimentClientError};
pub use models::{DocumentSentiment, SentenceScore};
