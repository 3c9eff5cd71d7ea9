//! Letter identity matching.
//!
//! Every place that asks "does this guess satisfy that phrase letter" goes
//! through [`LetterMatcher`], so the fold table lives in exactly one spot.
//!
//! Matching is directional: the *displayed* letter may carry a diacritic while
//! the *guessed* letter is plain, because input panels only offer unaccented keys.

/// Accented uppercase variants and the plain letter they fold to.
/// Only A/E/I/O/U and C have variants; anything else matches exactly or not at all.
const FOLD_TABLE: &[(char, &[char])] = &[
    ('A', &['À', 'Á', 'Â', 'Ã', 'Ä', 'Å', 'Æ']),
    ('E', &['È', 'É', 'Ê', 'Ë']),
    ('I', &['Ì', 'Í', 'Î', 'Ï']),
    ('O', &['Ò', 'Ó', 'Ô', 'Õ', 'Ö']),
    ('U', &['Ù', 'Ú', 'Û', 'Ü']),
    ('C', &['Ç']),
];

/// The plain vowels, used when a session pre-reveals vowels.
pub const VOWELS: &str = "aeiou";

/// The plain lowercase alphabet offered by a full input panel.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Decides whether two letters are the same for guessing purposes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterMatcher;

impl LetterMatcher {
    /// Case-fold a single codepoint to uppercase.
    ///
    /// Letters whose uppercase form expands to several codepoints (e.g. `ß`)
    /// are left untouched.
    pub fn fold(c: char) -> char {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => c,
        }
    }

    /// The plain base letter of an accented variant, already folded.
    /// Returns `None` for letters outside the fold table.
    pub fn base_letter(c: char) -> Option<char> {
        let folded = Self::fold(c);
        FOLD_TABLE
            .iter()
            .find(|(_, variants)| variants.contains(&folded))
            .map(|(base, _)| *base)
    }

    /// The letter a player would press to guess `c`: its base letter when it
    /// has one, otherwise the letter itself (folded).
    pub fn guess_key(c: char) -> char {
        Self::base_letter(c).unwrap_or_else(|| Self::fold(c))
    }

    /// Whether a guessed letter satisfies a displayed letter.
    ///
    /// Case-folded identity always matches. An accented `displayed` letter
    /// also matches its plain base `guess`, but not the other way round.
    pub fn equivalent(displayed: char, guess: char) -> bool {
        let displayed = Self::fold(displayed);
        let guess = Self::fold(guess);
        if displayed == guess {
            return true;
        }
        Self::base_letter(displayed) == Some(guess)
    }

    /// Whether `c` is one of the plain vowels.
    pub fn is_vowel(c: char) -> bool {
        VOWELS.contains(Self::fold(c).to_ascii_lowercase())
    }
}
