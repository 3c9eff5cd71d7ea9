use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::section::{PhraseSection, Section, SectionContext};
use crate::components::glyph::GlyphSlot;
use crate::core::phrase::{Phrase, PhraseList};
use crate::systems::layout::{flow_layout, LayoutParams};

/// Placement settings for a [`PhraseDisplay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Size of the region the phrase is laid out in.
    pub bounds: Vec2,
    /// Glyph size before any shrinking.
    pub cell: Vec2,
    /// Space between glyphs on both axes.
    pub padding: Vec2,
    /// Space between words.
    pub word_gap: f32,
    /// Shrink glyphs so the phrase fits the bounds.
    /// Turn off to let long phrases overflow instead.
    pub resize_overflow: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(800.0, 300.0),
            cell: Vec2::new(60.0, 80.0),
            padding: Vec2::new(8.0, 8.0),
            word_gap: 10.0,
            resize_overflow: true,
        }
    }
}

impl DisplayConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Flow layout parameters for this display.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            cell: self.cell,
            bounds: self.bounds,
            padding: self.padding,
            word_gap: self.word_gap,
            allow_shrink: self.resize_overflow,
        }
    }
}

/// Shows the phrase as glyph slots arranged in a flow layout.
#[derive(Debug, Clone, Default)]
pub struct PhraseDisplay {
    config: DisplayConfig,
    slots: Vec<GlyphSlot>,
    theme: Option<String>,
    cell: Vec2,
    line_count: u32,
}

impl PhraseDisplay {
    /// Create an empty display; slots appear on generate.
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            cell: config.cell,
            config,
            ..Default::default()
        }
    }

    /// The placement settings.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The theme header, when the settings ask for it.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Glyph size after layout.
    pub fn cell(&self) -> Vec2 {
        self.cell
    }

    /// Number of lines the phrase wrapped onto.
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    /// The phrase as the player currently sees it, `_` for hidden letters.
    pub fn masked(&self) -> String {
        let mut out = String::with_capacity(self.slots.len() * 2);
        let mut word = None;
        for slot in &self.slots {
            if word.is_some_and(|w| w != slot.word) {
                out.push(' ');
            }
            word = Some(slot.word);
            out.push(if slot.revealed { slot.letter } else { '_' });
        }
        out
    }

    /// Create one slot per letter of every word, then place them.
    fn build(&mut self, phrase: &Phrase) {
        let words = phrase.split();

        for (index, word) in words.iter().enumerate() {
            for letter in word.text().chars() {
                // Digits and punctuation have no key, so they start revealed.
                let revealed = phrase.is_exposed(letter) || !letter.is_alphabetic();
                self.slots.push(
                    GlyphSlot::new(letter)
                        .with_revealed(revealed)
                        .with_word(index as u32),
                );
            }
        }

        let lengths: Vec<usize> = words.iter().map(Phrase::len).collect();
        let layout = flow_layout(&lengths, &self.config.layout_params());

        for ((slot, pos), line) in self
            .slots
            .iter_mut()
            .zip(&layout.positions)
            .zip(&layout.lines)
        {
            slot.pos = *pos;
            slot.line = *line;
            slot.size = layout.cell;
        }
        self.cell = layout.cell;
        self.line_count = layout.line_count();
    }
}

impl Section for PhraseDisplay {
    fn generate(&mut self, ctx: &mut SectionContext<'_>, list: &PhraseList, phrase: &Phrase) {
        self.clear();
        if ctx.settings.show_theme {
            self.theme = Some(list.theme().to_owned());
        }
        self.build(phrase);
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.theme = None;
        self.cell = self.config.cell;
        self.line_count = 0;
    }

    fn is_completed(&self) -> bool {
        self.is_phrase_completed()
    }
}

impl PhraseSection for PhraseDisplay {
    fn set_letter(&mut self, letter: char) -> usize {
        self.slots
            .iter_mut()
            .map(|slot| slot.try_reveal(letter))
            .filter(|&revealed| revealed)
            .count()
    }

    fn slots(&self) -> &[GlyphSlot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;
    use crate::core::settings::Settings;

    fn generate(display: &mut PhraseDisplay, settings: &Settings, phrase: &Phrase) {
        let list = PhraseList::new("Fruit", vec![phrase.clone()]);
        let mut rng = Rng::new(1);
        let mut ctx = SectionContext { settings, rng: &mut rng };
        display.generate(&mut ctx, &list, phrase);
    }

    #[test]
    fn one_slot_per_letter_without_spaces() {
        let mut display = PhraseDisplay::new(DisplayConfig::default());
        generate(&mut display, &Settings::default(), &Phrase::new("red  apple"));
        assert_eq!(display.slots().len(), 8);
        assert_eq!(display.slots()[3].word, 1);
        assert_eq!(display.masked(), "___ _____");
    }

    #[test]
    fn guess_reveals_every_occurrence() {
        let mut display = PhraseDisplay::new(DisplayConfig::default());
        generate(&mut display, &Settings::default(), &Phrase::new("BANANA"));
        assert_eq!(display.set_letter('a'), 3);
        assert_eq!(display.masked(), "_A_A_A");
        assert_eq!(display.set_letter('A'), 0);
        assert!(!display.is_completed());
        assert_eq!(display.set_letter('n'), 2);
        assert_eq!(display.set_letter('b'), 1);
        assert!(display.is_completed());
    }

    #[test]
    fn plain_guess_reveals_accented_letters() {
        let mut display = PhraseDisplay::new(DisplayConfig::default());
        generate(&mut display, &Settings::default(), &Phrase::new("café"));
        assert_eq!(display.set_letter('e'), 1);
        assert_eq!(display.masked(), "___é");
    }

    #[test]
    fn exposed_and_punctuation_start_revealed() {
        let mut display = PhraseDisplay::new(DisplayConfig::default());
        let phrase = Phrase::new("rock-n-roll 2").expose(['o']);
        generate(&mut display, &Settings::default(), &phrase);
        assert_eq!(display.masked(), "_o__-_-_o__ 2");
    }

    #[test]
    fn theme_follows_settings() {
        let mut display = PhraseDisplay::new(DisplayConfig::default());
        let mut settings = Settings::default();
        generate(&mut display, &settings, &Phrase::new("kiwi"));
        assert_eq!(display.theme(), Some("Fruit"));

        settings.show_theme = false;
        generate(&mut display, &settings, &Phrase::new("kiwi"));
        assert_eq!(display.theme(), None);
    }

    #[test]
    fn slots_take_layout_positions() {
        let config = DisplayConfig {
            bounds: Vec2::new(5.0, 2.0),
            cell: Vec2::ONE,
            padding: Vec2::ZERO,
            word_gap: 0.0,
            resize_overflow: false,
        };
        let mut display = PhraseDisplay::new(config);
        generate(&mut display, &Settings::default(), &Phrase::new("an owl"));
        let xs: Vec<f32> = display.slots().iter().map(|s| s.pos.x).collect();
        assert_eq!(xs, vec![0.5, 1.5, 2.5, 3.5, 4.5]);
        assert!(display.slots().iter().all(|s| s.line == 0 && s.size == Vec2::ONE));
    }

    #[test]
    fn display_config_from_partial_json() {
        let config = DisplayConfig::from_json(r#"{ "bounds": [400, 120], "resizeOverflow": false }"#).unwrap();
        assert_eq!(config.bounds, Vec2::new(400.0, 120.0));
        assert!(!config.resize_overflow);
        assert_eq!(config.cell, DisplayConfig::default().cell);
    }

    #[test]
    fn clear_releases_slots() {
        let mut display = PhraseDisplay::new(DisplayConfig::default());
        generate(&mut display, &Settings::default(), &Phrase::new("fig"));
        display.clear();
        assert!(display.slots().is_empty());
        assert_eq!(display.theme(), None);
    }
}
