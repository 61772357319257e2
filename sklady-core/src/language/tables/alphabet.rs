//! Vowel and consonant inventories
//!
//! Letters may span several characters (digraphs such as `дж`). Lookups use
//! first match in declaration order, consonants before vowels, so the order
//! of the configuration decides between overlapping letters like `н` and
//! `нг`.

use std::collections::HashSet;

use super::letter_class::LetterClasses;
use crate::error::ConfigError;

/// Letter kind within the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterKind {
    /// Syllable nucleus
    Vowel,
    /// Onset or coda member
    Consonant,
}

/// One tokenized letter of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter<'a> {
    /// Declared vowel
    Vowel(&'a str),
    /// Declared consonant
    Consonant(&'a str),
    /// Character not covered by the alphabet
    Unknown(&'a str),
}

impl<'a> Letter<'a> {
    /// Letter text
    pub fn as_str(&self) -> &'a str {
        match self {
            Letter::Vowel(s) | Letter::Consonant(s) | Letter::Unknown(s) => s,
        }
    }
}

/// Language alphabet
#[derive(Debug, Clone)]
pub struct Alphabet {
    vowels: Vec<String>,
    consonants: Vec<String>,
}

impl Alphabet {
    /// Build from raw comma-joined strings, expanding class names first
    pub fn parse(
        vowels: &str,
        consonants: &str,
        classes: &LetterClasses,
    ) -> Result<Self, ConfigError> {
        let vowels = split_letters(&classes.expand_inline(vowels));
        let consonants = split_letters(&classes.expand_inline(consonants));

        if vowels.is_empty() {
            return Err(ConfigError::MissingField("Vowels"));
        }
        if consonants.is_empty() {
            return Err(ConfigError::MissingField("Consonants"));
        }

        let vowel_set: HashSet<&str> = vowels.iter().map(String::as_str).collect();
        if let Some(shared) = consonants.iter().find(|c| vowel_set.contains(c.as_str())) {
            return Err(ConfigError::OverlappingLetter(shared.clone()));
        }

        log::debug!(
            "alphabet: {} vowels, {} consonants",
            vowels.len(),
            consonants.len()
        );

        Ok(Self { vowels, consonants })
    }

    /// Vowels in declaration order
    pub fn vowels(&self) -> &[String] {
        &self.vowels
    }

    /// Consonants in declaration order
    pub fn consonants(&self) -> &[String] {
        &self.consonants
    }

    /// First declared letter that `text` starts with
    pub fn match_at(&self, text: &str) -> Option<(&str, LetterKind)> {
        self.consonants
            .iter()
            .find(|c| text.starts_with(c.as_str()))
            .map(|c| (c.as_str(), LetterKind::Consonant))
            .or_else(|| {
                self.vowels
                    .iter()
                    .find(|v| text.starts_with(v.as_str()))
                    .map(|v| (v.as_str(), LetterKind::Vowel))
            })
    }

    /// Split text into letters
    ///
    /// Characters that no letter covers are returned one by one as
    /// [`Letter::Unknown`]; callers decide whether that is an error.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<Letter<'t>> {
        let mut letters = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];
            match self.match_at(rest) {
                Some((letter, kind)) => {
                    let token = &rest[..letter.len()];
                    letters.push(match kind {
                        LetterKind::Vowel => Letter::Vowel(token),
                        LetterKind::Consonant => Letter::Consonant(token),
                    });
                    pos += letter.len();
                }
                None => {
                    let width = rest.chars().next().map_or(1, char::len_utf8);
                    letters.push(Letter::Unknown(&rest[..width]));
                    pos += width;
                }
            }
        }

        letters
    }
}

fn split_letters(expanded: &str) -> Vec<String> {
    expanded
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
