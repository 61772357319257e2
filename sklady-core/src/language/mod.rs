//! Language configuration
//!
//! A language is described by a declarative document: vowel and consonant
//! inventories, letter classes, rewrite rules and split rules. This module
//! holds the document schema, the loaders and the runtime tables derived
//! from it.

pub mod config;
pub mod loader;
pub mod tables;

pub use config::LanguageConfig;
pub use loader::{get_language_config, list_available_languages, load_file};
pub use tables::{Alphabet, Letter, LetterClass, LetterClasses, LetterKind};
