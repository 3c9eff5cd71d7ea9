use std::collections::BTreeSet;

use crate::api::section::{LetterSection, Section, SectionContext};
use crate::api::types::KeySelection;
use crate::core::matcher::{LetterMatcher, ALPHABET};
use crate::core::phrase::{Phrase, PhraseList};
use crate::core::settings::{LetterCasing, Settings};

/// A selectable key of the letter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    /// The letter as shown on the key.
    pub letter: char,
    /// Whether the key was already selected this session.
    pub used: bool,
}

/// The on-screen keyboard offering letters to guess with.
#[derive(Debug, Clone, Default)]
pub struct LetterPanel {
    keys: Vec<Key>,
    remove_on_select: bool,
}

impl LetterPanel {
    /// Create an empty panel; keys appear on generate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every key generated this session, used or not.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// The keys still on screen: used keys disappear when the settings ask for it.
    pub fn visible_keys(&self) -> impl Iterator<Item = &Key> {
        let remove_on_select = self.remove_on_select;
        self.keys.iter().filter(move |key| !(remove_on_select && key.used))
    }

    /// The letters of the visible keys, in panel order.
    pub fn letters(&self) -> String {
        self.visible_keys().map(|key| key.letter).collect()
    }

    /// The folded letters this panel offers for a phrase.
    fn key_set(settings: &Settings, phrase: &Phrase, mut decoy: impl FnMut(usize) -> usize) -> BTreeSet<char> {
        let mut letters: BTreeSet<char> = BTreeSet::new();

        if settings.use_full_alphabet_input {
            letters.extend(ALPHABET.chars().map(LetterMatcher::fold));
        } else {
            letters.extend(
                phrase
                    .text()
                    .chars()
                    .filter(|c| c.is_alphabetic())
                    .map(LetterMatcher::guess_key),
            );

            let mut candidates: Vec<char> = ALPHABET
                .chars()
                .map(LetterMatcher::fold)
                .filter(|c| !letters.contains(c))
                .collect();
            for _ in 0..settings.additional_input_letters {
                if candidates.is_empty() {
                    break;
                }
                let index = decoy(candidates.len());
                letters.insert(candidates.remove(index));
            }
        }

        letters.extend(
            settings
                .custom_input_characters
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(LetterMatcher::fold),
        );
        letters
    }
}

/// Keys show lowercase unless the session asks for uppercase.
fn key_face(casing: LetterCasing, letter: char) -> char {
    match casing {
        LetterCasing::Upper => LetterCasing::Upper.apply_char(letter),
        LetterCasing::AsIs | LetterCasing::Lower => LetterCasing::Lower.apply_char(letter),
    }
}

impl Section for LetterPanel {
    fn generate(&mut self, ctx: &mut SectionContext<'_>, _list: &PhraseList, phrase: &Phrase) {
        self.clear();
        let settings = ctx.settings;
        let rng = &mut *ctx.rng;
        let letters = Self::key_set(settings, phrase, |len| rng.pick_index(len));

        self.remove_on_select = settings.remove_letters_on_select;
        self.keys = letters
            .into_iter()
            .map(|letter| Key {
                letter: key_face(settings.casing, letter),
                used: false,
            })
            .collect();
    }

    fn clear(&mut self) {
        self.keys.clear();
    }
}

impl LetterSection for LetterPanel {
    fn select(&mut self, letter: char) -> KeySelection {
        let folded = LetterMatcher::fold(letter);
        match self
            .keys
            .iter_mut()
            .find(|key| LetterMatcher::fold(key.letter) == folded)
        {
            None => KeySelection::NotOffered,
            Some(key) if key.used => KeySelection::Repeated,
            Some(key) => {
                key.used = true;
                KeySelection::Accepted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;

    fn generate(panel: &mut LetterPanel, settings: &Settings, phrase: &str) {
        let phrase = Phrase::new(phrase);
        let list = PhraseList::new("Test", vec![phrase.clone()]);
        let mut rng = Rng::new(5);
        let mut ctx = SectionContext { settings, rng: &mut rng };
        panel.generate(&mut ctx, &list, &phrase);
    }

    #[test]
    fn full_alphabet_panel() {
        let mut panel = LetterPanel::new();
        generate(&mut panel, &Settings::default(), "owl");
        assert_eq!(panel.letters(), ALPHABET);
    }

    #[test]
    fn phrase_panel_folds_accents_and_keeps_unfoldable_letters() {
        let settings = Settings::default().with_full_alphabet(false);
        let mut panel = LetterPanel::new();
        generate(&mut panel, &settings, "Año café");
        assert_eq!(panel.letters(), "acefoñ");
    }

    #[test]
    fn decoys_are_distinct_extra_letters() {
        let mut settings = Settings::default().with_full_alphabet(false);
        settings.additional_input_letters = 3;
        let mut panel = LetterPanel::new();
        generate(&mut panel, &settings, "owl");
        let letters = panel.letters();
        assert_eq!(letters.chars().count(), 6);
        for c in ['o', 'w', 'l'] {
            assert!(letters.contains(c));
        }
    }

    #[test]
    fn decoys_stop_when_alphabet_runs_out() {
        let mut settings = Settings::default().with_full_alphabet(false);
        settings.additional_input_letters = 100;
        let mut panel = LetterPanel::new();
        generate(&mut panel, &settings, "owl");
        assert_eq!(panel.letters(), ALPHABET);
    }

    #[test]
    fn custom_characters_are_added_once() {
        let mut settings = Settings::default();
        settings.custom_input_characters = "ñ a".to_string();
        let mut panel = LetterPanel::new();
        generate(&mut panel, &settings, "owl");
        assert_eq!(panel.keys().len(), 27);
        assert!(panel.letters().ends_with('ñ'));
    }

    #[test]
    fn uppercase_casing_changes_key_faces() {
        let settings = Settings::default().with_casing(LetterCasing::Upper);
        let mut panel = LetterPanel::new();
        generate(&mut panel, &settings, "owl");
        assert!(panel.letters().starts_with("ABC"));
    }

    #[test]
    fn keys_are_selected_once() {
        let mut panel = LetterPanel::new();
        generate(&mut panel, &Settings::default(), "owl");
        assert_eq!(panel.select('O'), KeySelection::Accepted);
        assert_eq!(panel.select('o'), KeySelection::Repeated);
        assert_eq!(panel.select('é'), KeySelection::NotOffered);
        assert_eq!(panel.select('1'), KeySelection::NotOffered);
    }

    #[test]
    fn used_keys_removed_when_configured() {
        let mut settings = Settings::default();
        panel_with(&mut settings, false, |panel| {
            panel.select('a');
            assert_eq!(panel.visible_keys().count(), 26);
        });
        panel_with(&mut settings, true, |panel| {
            panel.select('a');
            assert_eq!(panel.visible_keys().count(), 25);
            assert_eq!(panel.select('a'), KeySelection::Repeated);
        });
    }

    fn panel_with(settings: &mut Settings, remove: bool, check: impl FnOnce(&mut LetterPanel)) {
        settings.remove_letters_on_select = remove;
        let mut panel = LetterPanel::new();
        generate(&mut panel, settings, "owl");
        check(&mut panel);
    }
}
