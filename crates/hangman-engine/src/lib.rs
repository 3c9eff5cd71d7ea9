pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::error::{CatalogError, SessionError};
pub use api::observer::SessionObserver;
pub use api::section::{LetterSection, PhraseSection, ScenarioSection, Section, SectionContext};
pub use api::types::{EventRecord, GuessOutcome, KeySelection, SessionEvent, SessionResult, SessionState};
pub use assets::catalog::PhraseCatalog;
pub use components::glyph::GlyphSlot;
pub use components::letter_panel::{Key, LetterPanel};
pub use components::phrase_display::{DisplayConfig, PhraseDisplay};
pub use components::scenario::Scenario;
pub use core::clock::SessionClock;
pub use core::matcher::{LetterMatcher, ALPHABET, VOWELS};
pub use core::phrase::{Phrase, PhraseList};
pub use core::rng::Rng;
pub use core::session::{GameSession, StandardSession};
pub use core::settings::{LetterCasing, Settings};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{GlyphBuffer, GlyphInstance};
pub use systems::layout::{flow_layout, FlowLayout, LayoutParams, MAX_LAYOUT_PASSES};
