//! Application services - Use case implementations

mod mood_classifier;
mod mood_service;
mod recommendation;
mod sentiment_service;
mod task_ranker;
mod task_recommendation_service;
pub mod text_normalizer;

pub use mood_classifier::{MoodClassifier, classify_mood};
pub use mood_service::MoodService;
pub use recommendation::{FALLBACK_TASK_DESCRIPTIONS, fallback_tasks};
pub use sentiment_service::{OK_SCORE_OVERRIDE, ScoreOverrides, SentimentService};
pub use task_ranker::{TaskRanker, rank_tasks, select_matching_tasks};
pub use task_recommendation_service::{
    SelectionPolicy, TaskRecommendation, TaskRecommendationService,
};
pub use text_normalizer::{Lexicon, TextNormalizer, tokenize};
