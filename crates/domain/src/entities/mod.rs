//! Domain entities

mod mood_analysis;
mod sentiment;
mod task;

pub use mood_analysis::MoodAnalysis;
pub use sentiment::{SentenceSentiment, SentimentResult};
pub use task::Task;
