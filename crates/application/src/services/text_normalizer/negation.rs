//! Negation scoping
//!
//! Keeps every negation word or phrase directly followed by the word it
//! negates, separated by exactly one space, so later stages see
//! "not happy" as two adjacent tokens.

use std::collections::HashSet;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

/// Compiled negation vocabulary
#[derive(Debug)]
pub struct NegationScope {
    matcher: AhoCorasick,
    words: HashSet<&'static str>,
}

impl NegationScope {
    /// Compile a scope from single words and multi-word phrases
    #[must_use]
    pub fn new(negations: &[&'static str]) -> Self {
        #[allow(clippy::expect_used)] // Infallible with valid static patterns
        let matcher = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .build(negations)
            .expect("Failed to build negation matcher");

        let words = negations.iter().copied().collect();

        Self { matcher, words }
    }

    /// Whether a token is an entry of the negation vocabulary
    ///
    /// Phrase entries only match as a whole, so "longer" alone is not a
    /// negation even though "no longer" is.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Collapse the whitespace between each negation and the following word
    ///
    /// Expects lowercased, punctuation-free text.
    #[must_use]
    pub fn scope(&self, text: &str) -> String {
        let mut scoped = String::with_capacity(text.len());
        let mut cursor = 0;

        for m in self.matcher.find_iter(text) {
            if m.start() < cursor || !on_word_boundaries(text, m.start(), m.end()) {
                continue;
            }
            scoped.push_str(&text[cursor..m.end()]);
            cursor = m.end();

            let rest = &text[m.end()..];
            let gap = rest.len() - rest.trim_start().len();
            let next_is_word = rest[gap..].chars().next().is_some_and(is_word_char);
            if gap > 0 && next_is_word {
                scoped.push(' ');
                cursor += gap;
            }
        }

        scoped.push_str(&text[cursor..]);
        scoped
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
