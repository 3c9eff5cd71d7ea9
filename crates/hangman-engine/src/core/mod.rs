pub mod clock;
pub mod matcher;
pub mod phrase;
pub mod rng;
pub mod session;
pub mod settings;
