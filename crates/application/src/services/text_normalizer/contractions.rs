//! Contraction expansion

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, Match};

/// How a contraction key attaches to the surrounding text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyKind {
    /// Whole token such as `can't`; must start on a word boundary
    Word,
    /// Clitic such as `'re` or `n't`; must follow a letter
    Suffix,
}

impl KeyKind {
    fn of(key: &str) -> Self {
        if key.starts_with('\'') || key.starts_with("n'") {
            Self::Suffix
        } else {
            Self::Word
        }
    }
}

#[derive(Debug)]
struct Entry {
    expansion: &'static str,
    kind: KeyKind,
}

/// Static contraction table compiled into a case-insensitive automaton
///
/// When several keys match at overlapping positions the leftmost one wins,
/// and among those starting at the same position the longest.
#[derive(Debug)]
pub struct ContractionTable {
    matcher: AhoCorasick,
    entries: Vec<Entry>,
}

impl ContractionTable {
    /// Compile a table from `(key, expansion)` pairs
    ///
    /// Keys are matched ASCII case-insensitively; expansions are inserted
    /// verbatim.
    #[must_use]
    pub fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        let keys: Vec<&str> = pairs.iter().map(|(key, _)| *key).collect();
        #[allow(clippy::expect_used)] // Infallible with valid static patterns
        let matcher = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .build(&keys)
            .expect("Failed to build contraction matcher");
        let entries = pairs
            .iter()
            .map(|&(key, expansion)| Entry {
                expansion,
                kind: KeyKind::of(key),
            })
            .collect();

        Self { matcher, entries }
    }

    /// Number of keys in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every owned contraction in `text` with its expansion
    #[must_use]
    pub fn expand(&self, text: &str) -> String {
        let text = fold_apostrophes(text);

        let mut matches: Vec<Match> = self
            .matcher
            .find_overlapping_iter(&text)
            .filter(|m| self.owns(&text, m))
            .collect();
        matches.sort_by(|a, b| a.start().cmp(&b.start()).then(b.len().cmp(&a.len())));

        let mut expanded = String::with_capacity(text.len() + 16);
        let mut cursor = 0;
        for m in matches {
            if m.start() < cursor {
                continue;
            }
            expanded.push_str(&text[cursor..m.start()]);
            expanded.push_str(self.entries[m.pattern().as_usize()].expansion);
            cursor = m.end();
        }
        expanded.push_str(&text[cursor..]);
        expanded
    }

    /// Whether a match sits on boundaries its key is allowed to claim
    fn owns(&self, text: &str, m: &Match) -> bool {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();

        if after.is_some_and(char::is_alphanumeric) {
            return false;
        }

        match self.entries[m.pattern().as_usize()].kind {
            KeyKind::Word => !before.is_some_and(|c| c.is_alphanumeric() || c == '\''),
            KeyKind::Suffix => before.is_some_and(char::is_alphabetic),
        }
    }
}

/// Map typographic single quotes onto the ASCII apostrophe
fn fold_apostrophes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '\u{02BC}' => '\'',
            other => other,
        })
        .collect()
}
