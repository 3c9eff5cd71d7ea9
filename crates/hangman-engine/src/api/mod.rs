pub mod error;
pub mod observer;
pub mod section;
pub mod types;
