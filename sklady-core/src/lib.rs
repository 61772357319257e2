//! Configurable, rule-driven syllable splitting
//!
//! A language is described by a declarative configuration: vowel and
//! consonant inventories, named letter classes, rewrite rules that
//! normalize spelling, and split rules that decide how consonants between
//! two vowels are divided. [`SyllableBreaker`] compiles such a
//! configuration once and then breaks words into syllables, optionally
//! recording the consonant clusters it meets in a [`ClusterIndex`].
//!
//! # Example
//!
//! ```rust
//! use sklady_core::{ClusterIndex, LanguageConfig, SyllableBreaker};
//!
//! let mut config = LanguageConfig::new("а,о", "б,к,р,н");
//! config.split_rules = vec!["|бр".to_string()];
//!
//! let breaker = SyllableBreaker::from_config(&config).unwrap();
//! let mut index = ClusterIndex::new();
//!
//! let word = breaker.break_word("кобра", &mut index).unwrap();
//! assert_eq!(word.to_string(), "ко-бра");
//! assert!(index.get("б р").is_some());
//! ```

pub mod breaker;
pub mod domain;
pub mod error;
pub mod language;
pub mod rules;

pub use breaker::{Analysis, SyllableBreaker};
pub use domain::{ClusterIndex, LetterCluster, Syllable, Word};
pub use error::{BreakError, ConfigError, Error, Result};
pub use language::{get_language_config, list_available_languages, LanguageConfig};
pub use rules::BoundaryPolicy;
