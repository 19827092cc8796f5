//! Static English vocabulary for the normalizer
//!
//! The tables are plain data. [`Lexicon::english`] compiles them once;
//! the result is immutable and shared behind an `Arc`.

use std::collections::HashSet;

use super::{contractions::ContractionTable, lemmatizer::Lemmatizer, negation::NegationScope};

/// Contraction keys and their expansions
///
/// Suffix keys (`n't`, `'re`, ...) expand with a leading space so the clitic
/// becomes its own word.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("can't", "can not"),
    ("won't", "will not"),
    ("i'm", "i am"),
    ("you're", "you are"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("it's", "it is"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("i'll", "i will"),
    ("we'll", "we will"),
    ("you'll", "you will"),
    ("he'll", "he will"),
    ("she'll", "she will"),
    ("let's", "let us"),
    ("that's", "that is"),
    ("n't", " not"),
    ("'m", " am"),
    ("'re", " are"),
    ("'s", " is"),
    ("'ll", " will"),
    ("'d", " would"),
    ("'ve", " have"),
    ("there's", "there is"),
    ("who's", "who is"),
    ("she'd", "she would"),
    ("he'd", "he would"),
    ("they'd", "they would"),
    ("you'd", "you would"),
    ("ain't", "is not"),
    ("y'all", "you all"),
    ("we'd", "we would"),
    ("it'd", "it would"),
];

/// Negation words and phrases; all are exempt from stopword removal
pub const NEGATIONS: &[&str] = &[
    "not",
    "no",
    "never",
    "none",
    "neither",
    "nor",
    "nobody",
    "nothing",
    "nowhere",
    "cannot",
    "won't",
    "isn't",
    "aren't",
    "wasn't",
    "weren't",
    "doesn't",
    "don't",
    "didn't",
    "hasn't",
    "haven't",
    "hadn't",
    "wouldn't",
    "shouldn't",
    "couldn't",
    "mustn't",
    "barely",
    "hardly",
    "scarcely",
    "seldom",
    "by no means",
    "in no way",
    "on no account",
    "at no time",
    "no longer",
    "no more",
    "not any",
    "not at all",
    "not even",
    "not only",
    "not until",
    "nevertheless",
    "nonetheless",
    "regardless",
    "despite",
    "without",
    "lack of",
    "fail to",
    "under no circumstances",
];

/// Words kept even though they appear in [`STOPWORDS`]
pub const PROTECTED_WORDS: &[&str] = &["but", "and", "can", "we", "will", "us"];

/// Standard English stopword list
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Tokens that bypass lemmatization
pub const UNLEMMATIZED: &[&str] = &["us"];

/// Compiled vocabulary consumed by [`super::TextNormalizer`]
#[derive(Debug)]
pub struct Lexicon {
    contractions: ContractionTable,
    negations: NegationScope,
    stopwords: HashSet<&'static str>,
    unlemmatized: HashSet<&'static str>,
    lemmatizer: Lemmatizer,
}

impl Lexicon {
    /// Compile the built-in English tables
    #[must_use]
    pub fn english() -> Self {
        let negations = NegationScope::new(NEGATIONS);
        let stopwords = STOPWORDS
            .iter()
            .copied()
            .filter(|word| !negations.contains(word) && !PROTECTED_WORDS.contains(word))
            .collect();

        Self {
            contractions: ContractionTable::new(CONTRACTIONS),
            negations,
            stopwords,
            unlemmatized: UNLEMMATIZED.iter().copied().collect(),
            lemmatizer: Lemmatizer::english(),
        }
    }

    #[must_use]
    pub const fn contractions(&self) -> &ContractionTable {
        &self.contractions
    }

    #[must_use]
    pub const fn negations(&self) -> &NegationScope {
        &self.negations
    }

    #[must_use]
    pub const fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }

    /// Whether the token is dropped by stopword removal
    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Whether the token is emitted as-is instead of lemmatized
    #[must_use]
    pub fn skips_lemmatization(&self, token: &str) -> bool {
        self.unlemmatized.contains(token)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}
