//! Property-based tests for the normalizer and the task policies

use application::{TextNormalizer, rank_tasks, select_matching_tasks, tokenize};
use domain::{MoodCategory, Priority, Task};
use proptest::prelude::*;

fn task_strategy() -> impl Strategy<Value = Task> {
    ("[a-z]{1,8}", -5i32..=5, -1.0f64..=1.0f64).prop_map(|(description, priority, score)| {
        Task::new(description)
            .with_priority(Priority::from(priority))
            .with_sentiment_score(score)
    })
}

// ============================================================================
// TextNormalizer Property Tests
// ============================================================================

mod normalizer_tests {
    use super::*;

    proptest! {
        #[test]
        fn normalize_is_deterministic(text in "\\PC{0,80}") {
            let normalizer = TextNormalizer::english();
            prop_assert_eq!(normalizer.normalize(&text), normalizer.normalize(&text));
        }

        #[test]
        fn separate_instances_agree(text in "[A-Za-z' ,.!?]{0,60}") {
            let a = TextNormalizer::english();
            let b = TextNormalizer::english();
            prop_assert_eq!(a.normalize(&text), b.normalize(&text));
        }

        #[test]
        fn output_is_single_spaced_words(text in "[A-Za-z' ,.!?\\t\\n]{0,60}") {
            let normalized = TextNormalizer::english().normalize(&text);
            prop_assert!(!normalized.starts_with(' '));
            prop_assert!(!normalized.ends_with(' '));
            prop_assert!(!normalized.contains("  "));
            prop_assert!(normalized.chars().all(|c| c.is_alphanumeric() || c == '_' || c == ' '));
        }

        #[test]
        fn output_is_lowercase(text in "[A-Za-z ]{0,60}") {
            let normalized = TextNormalizer::english().normalize(&text);
            prop_assert_eq!(normalized.to_lowercase(), normalized);
        }

        #[test]
        fn tokens_never_contain_whitespace(text in "\\PC{0,80}") {
            for token in tokenize(&text) {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.chars().any(char::is_whitespace));
            }
        }
    }
}

// ============================================================================
// Task Policy Property Tests
// ============================================================================

mod ranking_tests {
    use super::*;

    fn sorted_descriptions(tasks: &[Task]) -> Vec<String> {
        let mut descriptions: Vec<String> = tasks.iter().map(|t| t.description.clone()).collect();
        descriptions.sort();
        descriptions
    }

    proptest! {
        #[test]
        fn rank_is_a_permutation(
            tasks in prop::collection::vec(task_strategy(), 0..20),
            mood in -1.0f64..=1.0f64
        ) {
            let ranked = rank_tasks(&tasks, mood);
            prop_assert_eq!(ranked.len(), tasks.len());
            prop_assert_eq!(sorted_descriptions(&ranked), sorted_descriptions(&tasks));
        }

        #[test]
        fn uplifted_rank_is_priority_descending(
            tasks in prop::collection::vec(task_strategy(), 0..20),
            mood in 0.01f64..=1.0f64
        ) {
            let ranked = rank_tasks(&tasks, mood);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].priority >= pair[1].priority);
                if pair[0].priority == pair[1].priority {
                    prop_assert!(pair[0].sentiment_or_neutral() >= pair[1].sentiment_or_neutral());
                }
            }
        }

        #[test]
        fn low_rank_is_priority_ascending(
            tasks in prop::collection::vec(task_strategy(), 0..20),
            mood in -1.0f64..=-0.01f64
        ) {
            let ranked = rank_tasks(&tasks, mood);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].priority <= pair[1].priority);
                if pair[0].priority == pair[1].priority {
                    prop_assert!(pair[0].sentiment_or_neutral() >= pair[1].sentiment_or_neutral());
                }
            }
        }

        #[test]
        fn neutral_rank_keeps_input_order_within_priority(
            tasks in prop::collection::vec(task_strategy(), 0..20)
        ) {
            let ranked = rank_tasks(&tasks, 0.0);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].priority >= pair[1].priority);
            }
            for priority in -5i32..=5 {
                let priority = Priority::from(priority);
                let before: Vec<_> = tasks.iter().filter(|t| t.priority == priority).collect();
                let after: Vec<_> = ranked.iter().filter(|t| t.priority == priority).collect();
                prop_assert_eq!(before, after);
            }
        }

        #[test]
        fn selection_is_a_matching_subsequence(
            tasks in prop::collection::vec(task_strategy(), 0..20),
            mood_index in 0usize..3
        ) {
            let mood = MoodCategory::all()[mood_index];
            let selected = select_matching_tasks(mood, &tasks);

            let expected: Vec<_> = tasks
                .iter()
                .filter(|t| match mood {
                    MoodCategory::Positive => t.sentiment_or_neutral() > 0.0,
                    MoodCategory::Negative => t.sentiment_or_neutral() < 0.0,
                    MoodCategory::Neutral => t.sentiment_or_neutral() == 0.0,
                })
                .cloned()
                .collect();
            prop_assert_eq!(selected, expected);
        }
    }
}
