//! Error types for configuration compilation and word splitting
//!
//! Configuration errors are fatal: a breaker is never built from a
//! configuration that failed to compile. Break errors belong to a single
//! word and leave the caller free to continue with the next one.

use thiserror::Error;

/// Errors detected while loading or compiling a language configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required field is absent or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Letter class declaration is not of the form `name=item,item`
    #[error("Cannot parse letter class {0}")]
    MalformedLetterClass(String),

    /// Two letter classes share a name
    #[error("Duplicate letter class {0}")]
    DuplicateLetterClass(String),

    /// Letter class without members
    #[error("Letter class {0} has no letters")]
    EmptyLetterClass(String),

    /// Letter declared both as vowel and consonant
    #[error("Letter {0} is declared both as a vowel and as a consonant")]
    OverlappingLetter(String),

    /// Rule does not have the expected number of terms
    #[error("Invalid {kind} rule {rule}")]
    RuleArity {
        /// Rule family (`rewrite` or `split`)
        kind: &'static str,
        /// Rule text as configured
        rule: String,
    },

    /// Rule references letter classes in a way that cannot be resolved
    #[error("Ambiguous letter class reference in rule {rule}: {detail}")]
    AmbiguousClass {
        /// Rule text as configured
        rule: String,
        /// What made the reference ambiguous
        detail: String,
    },

    /// Replacement term names a class but the search term does not
    #[error("No search letter class found in rewrite rule {0}")]
    MissingSearchClass(String),

    /// Replacement class cannot cover every search class member
    #[error(
        "Replacement class {replacement} is shorter than search class {search} in rule {rule}"
    )]
    ClassLengthMismatch {
        /// Rule text as configured
        rule: String,
        /// Search class name
        search: String,
        /// Replacement class name
        replacement: String,
    },

    /// Rewrite context without the `_` substitution marker
    #[error("No substitution character (_) in rule {0}")]
    MissingMarker(String),

    /// Compiled pattern was rejected by the regex engine
    #[error("Invalid pattern in rule {rule}: {message}")]
    InvalidPattern {
        /// Rule text as configured
        rule: String,
        /// Message reported by the regex engine
        message: String,
    },

    /// Configuration file could not be read
    #[error("Failed to read '{path}': {message}")]
    Read {
        /// File path
        path: String,
        /// I/O error message
        message: String,
    },

    /// Configuration document could not be deserialized
    #[error("Failed to parse {source_name}: {message}")]
    Parse {
        /// File path or embedded language code
        source_name: String,
        /// Deserializer message
        message: String,
    },

    /// Requested embedded language does not exist
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Errors raised while splitting a single word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakError {
    /// Word contains a character sequence that is not in the alphabet
    #[error("Unrecognizable letter {letter} in word {word}")]
    UnrecognizableLetter {
        /// The offending letter
        letter: String,
        /// The word as submitted
        word: String,
    },

    /// Split rule produced a group that does not decode into whole letters
    #[error("Malformed letter cluster {0}")]
    MalformedCluster(String),
}

/// Umbrella error for callers that do not distinguish the two tiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Word-level error
    #[error("Break error: {0}")]
    Break(#[from] BreakError),
}

/// Result type for sklady operations
pub type Result<T> = std::result::Result<T, Error>;
