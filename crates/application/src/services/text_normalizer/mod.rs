//! Text normalization ahead of sentiment scoring
//!
//! Turns raw user text into a lowercase, punctuation-free token string
//! with contractions expanded, negations kept next to the word they
//! negate, stopwords removed and every remaining token lemmatized.
//!
//! Normalization is total and deterministic. It is **not** idempotent:
//! feeding normalized text back in can change it further, for example
//! `"feeling"` becomes `"feel"` on the first pass and a lemma such as
//! `"us"` survives only because it is exempt. Callers must not assume
//! `normalize(normalize(x)) == normalize(x)`.

mod contractions;
mod lemmatizer;
mod lexicon;
mod negation;

use std::sync::Arc;

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

pub use contractions::ContractionTable;
pub use lemmatizer::{Lemmatizer, PartOfSpeech};
pub use lexicon::{CONTRACTIONS, Lexicon, NEGATIONS, PROTECTED_WORDS, STOPWORDS};
pub use negation::NegationScope;

/// Pure text normalizer over a shared, read-only [`Lexicon`]
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    lexicon: Arc<Lexicon>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl TextNormalizer {
    #[must_use]
    pub const fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Normalizer over the built-in English tables
    #[must_use]
    pub fn english() -> Self {
        Self::new(Arc::new(Lexicon::english()))
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Normalize raw text; the result may be empty
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        let expanded = self.lexicon.contractions().expand(text);
        debug!(text = %expanded, "Expanded contractions");

        let lowered = expanded.to_lowercase();

        let stripped = strip_punctuation(&lowered);
        debug!(text = %stripped, "Removed punctuation");

        let scoped = self.lexicon.negations().scope(&stripped);
        debug!(text = %scoped, "Scoped negations");

        let tokens: Vec<String> = tokenize(&scoped)
            .into_iter()
            .filter(|token| !self.lexicon.is_stopword(token))
            .collect();
        debug!(?tokens, "Removed stopwords");

        let lemmas: Vec<String> = tokens
            .iter()
            .map(|token| {
                if self.lexicon.skips_lemmatization(token) {
                    token.clone()
                } else {
                    self.lexicon.lemmatizer().lemmatize(token)
                }
            })
            .collect();

        let normalized = lemmas.join(" ");
        debug!(text = %normalized, "Normalized text");
        normalized
    }
}

/// Split text into word tokens on Unicode word boundaries
///
/// Punctuation and whitespace never form tokens. `cannot` is split into
/// `can` and `not` so the negation stands on its own.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in text.unicode_words() {
        if word.eq_ignore_ascii_case("cannot") {
            let (can, not) = word.split_at(3);
            tokens.push(can.to_string());
            tokens.push(not.to_string());
        } else {
            tokens.push(word.to_string());
        }
    }
    tokens
}

/// Keep word characters and whitespace only
fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}
