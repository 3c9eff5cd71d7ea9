use glam::Vec2;

use crate::core::matcher::LetterMatcher;

/// One displayed letter position of a phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSlot {
    /// The phrase letter shown once revealed.
    pub letter: char,
    /// Whether the letter is shown to the player.
    pub revealed: bool,
    /// Index of the word this glyph belongs to.
    pub word: u32,
    /// Line the glyph was placed on by the layout.
    pub line: u32,
    /// Center of the glyph in display-local space.
    pub pos: Vec2,
    /// Rendered size of the glyph.
    pub size: Vec2,
}

impl GlyphSlot {
    /// Create a hidden slot at the origin.
    pub fn new(letter: char) -> Self {
        Self {
            letter,
            revealed: false,
            word: 0,
            line: 0,
            pos: Vec2::ZERO,
            size: Vec2::ONE,
        }
    }

    // -- Builder pattern --

    /// Set whether the slot starts revealed.
    pub fn with_revealed(mut self, revealed: bool) -> Self {
        self.revealed = revealed;
        self
    }

    /// Set the index of the owning word.
    pub fn with_word(mut self, word: u32) -> Self {
        self.word = word;
        self
    }

    /// Reveal the slot if `guess` matches its letter. Returns whether it was newly revealed.
    pub fn try_reveal(&mut self, guess: char) -> bool {
        if self.revealed || !LetterMatcher::equivalent(self.letter, guess) {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_once() {
        let mut slot = GlyphSlot::new('É');
        assert!(!slot.try_reveal('a'));
        assert!(slot.try_reveal('e'));
        assert!(!slot.try_reveal('e'));
        assert!(slot.revealed);
    }
}
