use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::matcher::LetterMatcher;
use crate::core::rng::Rng;
use crate::core::settings::LetterCasing;

/// A phrase to be guessed, with optional hints and the letters revealed up front.
///
/// Phrases are values: revealing letters or changing casing returns a new
/// phrase rather than mutating this one. The exposure set is always present
/// (possibly empty), so querying it never hits an unset state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PhraseDocument")]
pub struct Phrase {
    value: String,
    hints: Vec<String>,
    exposed_letters: BTreeSet<char>,
}

/// A phrase as written in a document, before exposure is checked against the text.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhraseDocument {
    value: String,
    #[serde(default, alias = "descriptions")]
    hints: Vec<String>,
    #[serde(default)]
    exposed_letters: BTreeSet<char>,
}

impl From<PhraseDocument> for Phrase {
    fn from(doc: PhraseDocument) -> Self {
        Phrase::new(doc.value)
            .with_hints(doc.hints)
            .expose(doc.exposed_letters)
    }
}

impl Phrase {
    /// Create a phrase with no hints and nothing exposed.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hints: Vec::new(),
            exposed_letters: BTreeSet::new(),
        }
    }

    /// Replace the hints.
    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = hints.into_iter().map(Into::into).collect();
        self
    }

    /// The phrase text.
    pub fn text(&self) -> &str {
        &self.value
    }

    /// Every hint, possibly none.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// The letters revealed at the start of a session.
    pub fn exposed_letters(&self) -> &BTreeSet<char> {
        &self.exposed_letters
    }

    /// Number of codepoints in the phrase, whitespace included.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.value.split_whitespace().count()
    }

    /// The codepoint at `index`, if any.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.value.chars().nth(index)
    }

    /// Split into one sub-phrase per word. Each word keeps this phrase's
    /// hints and exposure set; runs of whitespace produce no empty words.
    pub fn split(&self) -> Vec<Phrase> {
        self.value
            .split_whitespace()
            .map(|word| Phrase {
                value: word.to_owned(),
                hints: self.hints.clone(),
                exposed_letters: self.exposed_letters.clone(),
            })
            .collect()
    }

    /// A copy whose exposure set is replaced by `letters`.
    /// Letters the phrase does not contain are dropped.
    pub fn expose<I>(&self, letters: I) -> Phrase
    where
        I: IntoIterator<Item = char>,
    {
        let exposed_letters = letters.into_iter().filter(|&l| self.contains(l)).collect();
        Phrase {
            value: self.value.clone(),
            hints: self.hints.clone(),
            exposed_letters,
        }
    }

    /// A copy with the casing transform applied to the text.
    pub fn with_casing(&self, casing: LetterCasing) -> Phrase {
        Phrase {
            value: casing.apply_to(&self.value),
            hints: self.hints.clone(),
            exposed_letters: self.exposed_letters.clone(),
        }
    }

    /// Whether guessing `letter` would reveal at least one letter of the phrase.
    pub fn contains(&self, letter: char) -> bool {
        self.value
            .chars()
            .any(|displayed| LetterMatcher::equivalent(displayed, letter))
    }

    /// Whether the displayed `letter` is covered by the exposure set.
    pub fn is_exposed(&self, letter: char) -> bool {
        self.exposed_letters
            .iter()
            .any(|&exposed| LetterMatcher::equivalent(letter, exposed))
    }

    /// The first hint, if the phrase has any.
    pub fn first_hint(&self) -> Option<&str> {
        self.hints.first().map(String::as_str)
    }

    /// A uniformly chosen hint, if the phrase has any.
    pub fn pick_hint(&self, rng: &mut Rng) -> Option<&str> {
        if self.hints.is_empty() {
            return None;
        }
        let index = rng.pick_index(self.hints.len());
        self.hints.get(index).map(String::as_str)
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A themed, read-only list of phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseList {
    theme: String,
    #[serde(default)]
    phrases: Vec<Phrase>,
}

impl PhraseList {
    /// Create a list under a theme.
    pub fn new(theme: impl Into<String>, phrases: Vec<Phrase>) -> Self {
        Self {
            theme: theme.into(),
            phrases,
        }
    }

    /// The list theme, shown as a header when enabled.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Number of phrases in the list.
    pub fn count(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the list has no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// The phrase at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Phrase> {
        self.phrases.get(index)
    }

    /// Iterate over the phrases in order.
    pub fn iter(&self) -> impl Iterator<Item = &Phrase> {
        self.phrases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_discards_empty_segments() {
        let p = Phrase::new("  the   quick\tfox ").with_hints(["animal"]);
        let words = p.split();
        let texts: Vec<&str> = words.iter().map(Phrase::text).collect();
        assert_eq!(texts, vec!["the", "quick", "fox"]);
        assert!(words.iter().all(|w| w.hints() == ["animal".to_string()]));
    }

    #[test]
    fn split_then_join_collapses_whitespace() {
        let p = Phrase::new("a  stitch in\n time");
        let joined = p
            .split()
            .iter()
            .map(Phrase::text)
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(joined, "a stitch in time");
    }

    #[test]
    fn split_inherits_exposure() {
        let p = Phrase::new("big owl").expose(['o', 'i']);
        for word in p.split() {
            assert_eq!(word.exposed_letters(), p.exposed_letters());
        }
    }

    #[test]
    fn expose_returns_new_value() {
        let p = Phrase::new("banana");
        let exposed = p.expose(['a']);
        assert!(p.exposed_letters().is_empty());
        assert!(exposed.is_exposed('A'));
        assert!(!exposed.is_exposed('n'));
    }

    #[test]
    fn expose_drops_letters_not_in_phrase() {
        let p = Phrase::new("owl").expose("aeiou".chars());
        assert_eq!(p.exposed_letters().iter().collect::<Vec<_>>(), vec![&'o']);
    }

    #[test]
    fn exposure_folds_diacritics() {
        let p = Phrase::new("café").expose("aeiou".chars());
        assert!(p.is_exposed('é'));
        assert!(p.is_exposed('A'));
        assert!(!p.is_exposed('c'));
    }

    #[test]
    fn contains_uses_matcher() {
        let p = Phrase::new("Crème Brûlée");
        assert!(p.contains('e'));
        assert!(p.contains('U'));
        assert!(p.contains('è'));
        assert!(!p.contains('z'));
    }

    #[test]
    fn counts_and_indexing() {
        let p = Phrase::new("an owl");
        assert_eq!(p.len(), 6);
        assert_eq!(p.word_count(), 2);
        assert_eq!(p.letter(3), Some('o'));
        assert_eq!(p.letter(6), None);
        assert_eq!(p.to_string(), "an owl");
    }

    #[test]
    fn hints() {
        let none = Phrase::new("owl");
        let mut rng = Rng::new(7);
        assert_eq!(none.first_hint(), None);
        assert_eq!(none.pick_hint(&mut rng), None);

        let some = Phrase::new("owl").with_hints(["hoots", "nocturnal"]);
        assert_eq!(some.first_hint(), Some("hoots"));
        let picked = some.pick_hint(&mut rng).unwrap();
        assert!(picked == "hoots" || picked == "nocturnal");
    }

    #[test]
    fn parse_phrase_with_legacy_descriptions() {
        let json = r#"{ "value": "owl", "descriptions": ["bird"], "exposedLetters": ["o"] }"#;
        let p: Phrase = serde_json::from_str(json).unwrap();
        assert_eq!(p.hints(), ["bird".to_string()]);
        assert!(p.is_exposed('O'));
    }

    #[test]
    fn parsed_exposure_is_limited_to_the_text() {
        let json = r#"{ "value": "owl", "exposedLetters": ["z", "o"] }"#;
        let p: Phrase = serde_json::from_str(json).unwrap();
        assert_eq!(p.exposed_letters().iter().collect::<Vec<_>>(), vec![&'o']);
        assert!(!p.is_exposed('z'));
    }
}
