pub mod catalog;

pub use catalog::PhraseCatalog;
