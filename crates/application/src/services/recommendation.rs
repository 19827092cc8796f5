//! Generic recommendations used when no task matches the mood

use domain::Task;

/// Descriptions of the fallback tasks, in recommendation order
pub const FALLBACK_TASK_DESCRIPTIONS: [&str; 3] = [
    "Go for a walk in the park",
    "Read a book",
    "Listen to your favorite music",
];

/// Fixed, non-empty list of generally uplifting tasks
#[must_use]
pub fn fallback_tasks() -> Vec<Task> {
    FALLBACK_TASK_DESCRIPTIONS.into_iter().map(Task::new).collect()
}
