//! Runtime tables built from the language configuration

pub mod alphabet;
pub mod letter_class;

pub use alphabet::{Alphabet, Letter, LetterKind};
pub use letter_class::{ClassOccurrence, LetterClass, LetterClasses};
