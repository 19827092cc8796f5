//! Adapters implementing application ports

mod sentiment_adapter;

pub use sentiment_adapter::SentimentAdapter;
