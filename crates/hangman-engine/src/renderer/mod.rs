pub mod instance;

pub use instance::{GlyphBuffer, GlyphInstance};
