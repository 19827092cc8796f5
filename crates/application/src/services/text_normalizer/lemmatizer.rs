//! Rule-based English lemmatizer
//!
//! Works without a lexical database: irregular forms come from small
//! tables, regular forms are reduced with WordNet-style detachment rules
//! plus the Porter step 1b fix-ups, and every rule refuses to strip a
//! token down to something without a vowel.

use std::collections::{HashMap, HashSet};

/// Coarse part of speech used to pick detachment rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartOfSpeech {
    #[default]
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Map a Penn Treebank tag (`JJ`, `VBD`, `NNS`, `RB`, ...) onto a part of speech
    ///
    /// Unknown tags fall back to [`PartOfSpeech::Noun`].
    #[must_use]
    pub fn from_treebank_tag(tag: &str) -> Self {
        match tag.chars().next() {
            Some('J') => Self::Adjective,
            Some('V') => Self::Verb,
            Some('R') => Self::Adverb,
            _ => Self::Noun,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("went", "go"),
    ("gone", "go"),
    ("goes", "go"),
    ("did", "do"),
    ("done", "do"),
    ("does", "do"),
    ("had", "have"),
    ("has", "have"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("felt", "feel"),
    ("thought", "think"),
    ("got", "get"),
    ("gotten", "get"),
    ("ran", "run"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("saw", "see"),
    ("seen", "see"),
    ("came", "come"),
    ("gave", "give"),
    ("given", "give"),
    ("wrote", "write"),
    ("written", "write"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("sent", "send"),
    ("spent", "spend"),
    ("slept", "sleep"),
    ("kept", "keep"),
    ("met", "meet"),
    ("paid", "pay"),
    ("said", "say"),
    ("told", "tell"),
    ("found", "find"),
    ("won", "win"),
    ("lost", "lose"),
    ("began", "begin"),
    ("begun", "begin"),
    ("broke", "break"),
    ("broken", "break"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("knew", "know"),
    ("known", "know"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("sat", "sit"),
    ("stood", "stand"),
    ("swam", "swim"),
    ("taught", "teach"),
    ("understood", "understand"),
    ("woke", "wake"),
    ("woken", "wake"),
    ("flew", "fly"),
    ("drew", "draw"),
    ("grew", "grow"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("blew", "blow"),
    ("spoke", "speak"),
    ("built", "build"),
    ("sold", "sell"),
    ("held", "hold"),
    ("heard", "hear"),
    ("meant", "mean"),
    ("caught", "catch"),
    ("fought", "fight"),
    ("sought", "seek"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("hid", "hide"),
    ("hidden", "hide"),
    ("died", "die"),
    ("dying", "die"),
    ("lied", "lie"),
    ("lying", "lie"),
    ("tied", "tie"),
    ("tying", "tie"),
    ("used", "use"),
    ("using", "use"),
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("wolves", "wolf"),
    ("shelves", "shelf"),
    ("loaves", "loaf"),
    ("thieves", "thief"),
    ("selves", "self"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("diagnoses", "diagnosis"),
];

const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("farther", "far"),
    ("further", "far"),
];

/// Participles that read as adjectives when describing a feeling
const PARTICIPLE_ADJECTIVES: &[&str] = &[
    "excited",
    "tired",
    "bored",
    "stressed",
    "interested",
    "motivated",
    "overwhelmed",
    "worried",
    "annoyed",
    "frustrated",
    "exhausted",
    "scared",
    "relaxed",
    "pleased",
    "surprised",
    "disappointed",
    "depressed",
    "confused",
    "ashamed",
    "embarrassed",
    "amazed",
    "inspired",
    "satisfied",
    "delighted",
    "thrilled",
    "united",
];

/// Words ending in `-ing`/`-ed` that are not verb forms
const NOT_VERB_FORMS: &[&str] = &[
    "morning", "evening", "nothing", "something", "anything", "everything", "thing", "king",
    "ring", "spring", "string", "ceiling", "during", "wedding", "pudding", "sibling", "darling",
    "hundred", "bed", "shed", "red", "need", "seed", "feed", "weed", "speed", "breed", "greed",
    "bleed", "steed", "creed", "sacred", "naked", "wicked", "kindred", "rugged", "ragged",
    "beloved",
];

/// Nouns ending in `-ier` that are not comparatives
const IER_NOUNS: &[&str] = &[
    "cashier", "soldier", "barrier", "frontier", "courier", "carrier", "supplier", "dossier",
    "glacier", "premier", "pier", "tier", "terrier",
];

/// Nouns whose singular ends in `-ie`
const IE_NOUNS: &[&str] = &[
    "movie", "cookie", "calorie", "selfie", "rookie", "zombie", "smoothie", "goalie", "hoodie",
    "brownie", "genie", "pixie", "freebie", "sweetie", "auntie", "prairie", "birdie",
];

/// Words ending in `s` that are already base forms
const INVARIANT_NOUNS: &[&str] = &[
    "news", "series", "species", "means", "always", "perhaps", "sometimes", "physics",
    "mathematics", "economics", "politics", "ethics", "clothes", "pants", "thanks", "lens",
    "chaos", "bias", "atlas", "canvas", "alias", "towards", "afterwards", "besides", "whereas",
    "christmas", "james", "kudos", "yes", "thus", "texas", "xmas", "pros", "cons", "odds",
];

/// Lemmatizer tables compiled once and shared by reference
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregular_verbs: HashMap<&'static str, &'static str>,
    irregular_nouns: HashMap<&'static str, &'static str>,
    irregular_adjectives: HashMap<&'static str, &'static str>,
    participle_adjectives: HashSet<&'static str>,
    not_verb_forms: HashSet<&'static str>,
    ier_nouns: HashSet<&'static str>,
    ie_nouns: HashSet<&'static str>,
    invariant_nouns: HashSet<&'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Lemmatizer {
    /// Build the English tables
    #[must_use]
    pub fn english() -> Self {
        Self {
            irregular_verbs: IRREGULAR_VERBS.iter().copied().collect(),
            irregular_nouns: IRREGULAR_NOUNS.iter().copied().collect(),
            irregular_adjectives: IRREGULAR_ADJECTIVES.iter().copied().collect(),
            participle_adjectives: PARTICIPLE_ADJECTIVES.iter().copied().collect(),
            not_verb_forms: NOT_VERB_FORMS.iter().copied().collect(),
            ier_nouns: IER_NOUNS.iter().copied().collect(),
            ie_nouns: IE_NOUNS.iter().copied().collect(),
            invariant_nouns: INVARIANT_NOUNS.iter().copied().collect(),
        }
    }

    /// Guess the part of speech of a lowercase token from its form
    #[must_use]
    pub fn tag(&self, token: &str) -> PartOfSpeech {
        let len = token.chars().count();

        if self.irregular_verbs.contains_key(token) {
            PartOfSpeech::Verb
        } else if self.irregular_adjectives.contains_key(token)
            || self.participle_adjectives.contains(token)
        {
            PartOfSpeech::Adjective
        } else if self.irregular_nouns.contains_key(token) || self.invariant_nouns.contains(token)
        {
            PartOfSpeech::Noun
        } else if token.ends_with("ly") && len > 4 {
            PartOfSpeech::Adverb
        } else if ((token.ends_with("ing") && len >= 5) || (token.ends_with("ed") && len >= 4))
            && !self.not_verb_forms.contains(token)
        {
            PartOfSpeech::Verb
        } else if token.ends_with("iest")
            || (token.ends_with("ier") && len > 5 && !self.ier_nouns.contains(token))
        {
            PartOfSpeech::Adjective
        } else {
            PartOfSpeech::Noun
        }
    }

    /// Tag and reduce a token in one step
    #[must_use]
    pub fn lemmatize(&self, token: &str) -> String {
        self.lemmatize_as(token, self.tag(token))
    }

    /// Reduce a lowercase token to its base form given its part of speech
    #[must_use]
    pub fn lemmatize_as(&self, token: &str, pos: PartOfSpeech) -> String {
        match pos {
            PartOfSpeech::Noun => self.noun(token),
            PartOfSpeech::Verb => self.verb(token),
            PartOfSpeech::Adjective => self.adjective(token),
            PartOfSpeech::Adverb => token.to_string(),
        }
    }

    fn noun(&self, token: &str) -> String {
        if let Some(base) = self.irregular_nouns.get(token) {
            return (*base).to_string();
        }
        if token.len() <= 3
            || self.invariant_nouns.contains(token)
            || ["ss", "us", "is", "ous", "ics"]
                .iter()
                .any(|suffix| token.ends_with(suffix))
        {
            return token.to_string();
        }

        if let Some(stem) = token.strip_suffix("ies") {
            if token.len() <= 4 || self.ie_nouns.contains(format!("{stem}ie").as_str()) {
                return token[..token.len() - 1].to_string();
            }
            return format!("{stem}y");
        }
        if ["sses", "shes", "ches", "xes"]
            .iter()
            .any(|suffix| token.ends_with(suffix))
        {
            return token[..token.len() - 2].to_string();
        }
        match token.strip_suffix('s') {
            Some(stem) if has_vowel(stem) => stem.to_string(),
            _ => token.to_string(),
        }
    }

    fn verb(&self, token: &str) -> String {
        if let Some(base) = self.irregular_verbs.get(token) {
            return (*base).to_string();
        }

        if let Some(stem) = token.strip_suffix("ied") {
            if !stem.is_empty() {
                return format!("{stem}y");
            }
        }
        if token.ends_with("eed") {
            if token.len() > 4 {
                return token[..token.len() - 1].to_string();
            }
            return token.to_string();
        }
        for suffix in ["ing", "ed"] {
            if let Some(stem) = token.strip_suffix(suffix) {
                if stem.len() >= 2 && has_vowel(stem) {
                    return restore_stem(stem);
                }
                return token.to_string();
            }
        }
        if let Some(stem) = token.strip_suffix("ies") {
            if !stem.is_empty() {
                return format!("{stem}y");
            }
        }
        if ["sses", "shes", "ches", "xes", "zes", "oes"]
            .iter()
            .any(|suffix| token.ends_with(suffix))
        {
            return token[..token.len() - 2].to_string();
        }
        match token.strip_suffix('s') {
            Some(stem) if !stem.ends_with('s') && has_vowel(stem) => stem.to_string(),
            _ => token.to_string(),
        }
    }

    fn adjective(&self, token: &str) -> String {
        if let Some(base) = self.irregular_adjectives.get(token) {
            return (*base).to_string();
        }
        if self.participle_adjectives.contains(token) {
            return token.to_string();
        }
        let stem = token
            .strip_suffix("iest")
            .or_else(|| token.strip_suffix("ier"));
        match stem {
            Some(stem) if has_vowel(stem) => format!("{stem}y"),
            _ => token.to_string(),
        }
    }
}

/// Porter step 1b clean-up after removing `-ing`/`-ed`
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();

    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{stem}e");
    }
    if let [.., a, b] = chars.as_slice() {
        if a == b && is_consonant(&chars, chars.len() - 1) && !matches!(*b, 'l' | 's' | 'z') {
            return chars[..chars.len() - 1].iter().collect();
        }
    }
    if measure(&chars) == 1 && ends_cvc(&chars) {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn is_consonant(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(chars, i - 1),
        _ => true,
    }
}

fn has_vowel(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    (0..chars.len()).any(|i| !is_consonant(&chars, i))
}

/// Number of vowel-consonant sequences in the stem
fn measure(chars: &[char]) -> usize {
    let mut count = 0;
    let mut seen_vowel = false;
    for i in 0..chars.len() {
        if is_consonant(chars, i) {
            if seen_vowel {
                count += 1;
                seen_vowel = false;
            }
        } else {
            seen_vowel = true;
        }
    }
    count
}

/// Whether the stem ends consonant-vowel-consonant with a final letter other than w, x or y
fn ends_cvc(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 3
        && is_consonant(chars, n - 3)
        && !is_consonant(chars, n - 2)
        && is_consonant(chars, n - 1)
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
}
