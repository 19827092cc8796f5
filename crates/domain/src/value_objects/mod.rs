//! Value Objects - Immutable, identity-less domain primitives

mod mood_category;
mod mood_thresholds;
mod priority;

pub use mood_category::MoodCategory;
pub use mood_thresholds::MoodThresholds;
pub use priority::Priority;
