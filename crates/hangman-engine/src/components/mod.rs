pub mod glyph;
pub mod letter_panel;
pub mod phrase_display;
pub mod scenario;
