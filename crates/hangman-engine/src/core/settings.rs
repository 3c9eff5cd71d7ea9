use serde::{Deserialize, Serialize};

use crate::core::phrase::PhraseList;

/// The casing applied to letters shown in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterCasing {
    /// Keep letters exactly as written in the phrase list.
    #[default]
    AsIs,
    Upper,
    Lower,
}

impl LetterCasing {
    /// Apply the casing to a whole string.
    pub fn apply_to(self, text: &str) -> String {
        match self {
            LetterCasing::AsIs => text.to_owned(),
            LetterCasing::Upper => text.to_uppercase(),
            LetterCasing::Lower => text.to_lowercase(),
        }
    }

    /// Apply the casing to a single letter. Multi-codepoint expansions keep the original.
    pub fn apply_char(self, c: char) -> char {
        let mapped: Option<char> = match self {
            LetterCasing::AsIs => Some(c),
            LetterCasing::Upper => single(c.to_uppercase()),
            LetterCasing::Lower => single(c.to_lowercase()),
        };
        mapped.unwrap_or(c)
    }
}

fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Configuration for a hangman session.
/// Loaded from JSON; every missing field takes its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Session time limit in seconds. 0 disables the clock.
    pub time_limit_seconds: f32,
    /// Pre-reveal the vowels at the start of a session.
    pub show_vowels: bool,
    /// Show the theme of the list the phrase was picked from.
    pub show_theme: bool,
    /// Remove keys from the letter panel once selected, instead of greying them out.
    pub remove_letters_on_select: bool,
    pub casing: LetterCasing,
    /// Offer the whole alphabet, rather than only the letters of the phrase.
    pub use_full_alphabet_input: bool,
    /// Extra decoy letters added when the panel is built from the phrase.
    pub additional_input_letters: u32,
    /// Characters always added to the letter panel.
    pub custom_input_characters: String,
    /// Wrong guesses allowed before the session fails. At least 1.
    pub lives: u32,
    /// Take the number of lives from the scenario's part count instead of `lives`.
    pub base_lives_on_scenario_part_count: bool,
    pub phrase_lists: Vec<PhraseList>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_limit_seconds: 300.0,
            show_vowels: false,
            show_theme: true,
            remove_letters_on_select: false,
            casing: LetterCasing::AsIs,
            use_full_alphabet_input: true,
            additional_input_letters: 0,
            custom_input_characters: String::new(),
            lives: 12,
            base_lives_on_scenario_part_count: false,
            phrase_lists: Vec::new(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether a time limit is configured.
    pub fn uses_time_limit(&self) -> bool {
        self.time_limit_seconds > 0.0
    }

    /// The configured lives, never below 1.
    pub fn lives(&self) -> u32 {
        self.lives.max(1)
    }

    // -- Builder pattern --

    /// Set the time limit; 0 disables it.
    pub fn with_time_limit(mut self, seconds: f32) -> Self {
        self.time_limit_seconds = seconds;
        self
    }

    /// Pre-reveal vowels or not.
    pub fn with_show_vowels(mut self, show: bool) -> Self {
        self.show_vowels = show;
        self
    }

    /// Set the letter casing.
    pub fn with_casing(mut self, casing: LetterCasing) -> Self {
        self.casing = casing;
        self
    }

    /// Set the wrong guesses allowed.
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    /// Offer the full alphabet or only the phrase letters.
    pub fn with_full_alphabet(mut self, full: bool) -> Self {
        self.use_full_alphabet_input = full;
        self
    }

    /// Add a phrase list to pick from.
    pub fn with_phrase_list(mut self, list: PhraseList) -> Self {
        self.phrase_lists.push(list);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let s = Settings::default();
        assert_eq!(s.time_limit_seconds, 300.0);
        assert!(s.show_theme);
        assert!(!s.show_vowels);
        assert!(s.use_full_alphabet_input);
        assert_eq!(s.lives, 12);
        assert!(s.uses_time_limit());
    }

    #[test]
    fn parse_partial_settings() {
        let json = r#"{
            "timeLimitSeconds": 0,
            "showVowels": true,
            "casing": "upper",
            "phraseLists": [
                { "theme": "Animals", "phrases": [ { "value": "owl" } ] }
            ]
        }"#;
        let s = Settings::from_json(json).unwrap();
        assert!(!s.uses_time_limit());
        assert!(s.show_vowels);
        assert_eq!(s.casing, LetterCasing::Upper);
        assert_eq!(s.lives, 12);
        assert_eq!(s.phrase_lists.len(), 1);
        assert_eq!(s.phrase_lists[0].theme(), "Animals");
    }

    #[test]
    fn lives_never_below_one() {
        let s = Settings::default().with_lives(0);
        assert_eq!(s.lives(), 1);
    }

    #[test]
    fn casing_transforms() {
        assert_eq!(LetterCasing::Upper.apply_to("Café"), "CAFÉ");
        assert_eq!(LetterCasing::Lower.apply_to("OWL"), "owl");
        assert_eq!(LetterCasing::AsIs.apply_to("OwL"), "OwL");
        assert_eq!(LetterCasing::Upper.apply_char('é'), 'É');
        assert_eq!(LetterCasing::Upper.apply_char('ß'), 'ß');
    }
}
