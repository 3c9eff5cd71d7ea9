use crate::api::types::KeySelection;
use crate::components::glyph::GlyphSlot;
use crate::core::phrase::{Phrase, PhraseList};
use crate::core::rng::Rng;
use crate::core::settings::Settings;

/// What a section gets to work with while generating.
pub struct SectionContext<'a> {
    /// Settings of the session being started.
    pub settings: &'a Settings,
    /// The session's random source.
    pub rng: &'a mut Rng,
}

/// A participant of a session: generated on start, cleared on restart,
/// and asked every tick whether it has completed.
pub trait Section {
    /// Build this section for a freshly selected phrase.
    fn generate(&mut self, ctx: &mut SectionContext<'_>, list: &PhraseList, phrase: &Phrase);

    /// Release everything created by `generate`.
    fn clear(&mut self);

    /// Whether this section wants the session to finish.
    fn is_completed(&self) -> bool {
        false
    }
}

/// The input panel offering keys to guess with.
pub trait LetterSection: Section {
    fn select(&mut self, letter: char) -> KeySelection;
}

/// The section showing the phrase being guessed.
pub trait PhraseSection: Section {
    /// Reveal every glyph matching `letter`. Returns how many were newly revealed.
    fn set_letter(&mut self, letter: char) -> usize;

    /// The glyphs currently on display.
    fn slots(&self) -> &[GlyphSlot];

    /// Whether every glyph is revealed.
    fn is_phrase_completed(&self) -> bool {
        self.slots().iter().all(|slot| slot.revealed)
    }
}

/// The failure scenario counting down wrong guesses.
pub trait ScenarioSection: Section {
    /// Spend one failure.
    fn fail(&mut self);

    /// Number of failures spent so far.
    fn unlocked_count(&self) -> u32;
}
