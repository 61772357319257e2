//! Syllable and word structures

use std::fmt;

use serde::Serialize;

/// One syllable: onset consonants, an optional vowel nucleus, coda consonants
///
/// Only a syllable made of a consonant-only segment lacks a nucleus. Such a
/// segment is kept as one syllable rather than rejected: with the prefix
/// `про`, the word `прок` breaks into `про` and a bare `к`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Syllable {
    onset: Vec<String>,
    nucleus: Option<String>,
    coda: Vec<String>,
}

impl Syllable {
    /// Empty syllable
    pub fn new() -> Self {
        Self::default()
    }

    /// Syllable starting at a vowel
    pub fn with_nucleus(vowel: impl Into<String>) -> Self {
        Self {
            nucleus: Some(vowel.into()),
            ..Self::default()
        }
    }

    pub fn onset(&self) -> &[String] {
        &self.onset
    }

    pub fn nucleus(&self) -> Option<&str> {
        self.nucleus.as_deref()
    }

    pub fn coda(&self) -> &[String] {
        &self.coda
    }

    /// Letters in reading order
    pub fn letters(&self) -> impl Iterator<Item = &str> {
        self.onset
            .iter()
            .map(String::as_str)
            .chain(self.nucleus.as_deref())
            .chain(self.coda.iter().map(String::as_str))
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        self.onset.len() + usize::from(self.nucleus.is_some()) + self.coda.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn set_nucleus(&mut self, vowel: impl Into<String>) {
        self.nucleus = Some(vowel.into());
    }

    pub(crate) fn push_onset(&mut self, consonant: impl Into<String>) {
        self.onset.push(consonant.into());
    }

    pub(crate) fn push_coda(&mut self, consonant: impl Into<String>) {
        self.coda.push(consonant.into());
    }

    pub(crate) fn set_onset(&mut self, onset: Vec<String>) {
        self.onset = onset;
    }

    pub(crate) fn set_coda(&mut self, coda: Vec<String>) {
        self.coda = coda;
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            f.write_str(letter)?;
        }
        Ok(())
    }
}

/// Syllabified word
///
/// Prefixes and separator-delimited parts are broken independently, so a
/// word is a sequence of segments. Syllables of neighbouring segments are
/// never linked: [`Word::next`] stops at a segment end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Word {
    syllables: Vec<Syllable>,
    #[serde(skip)]
    segment_ends: Vec<usize>,
}

impl Word {
    pub fn new() -> Self {
        Self::default()
    }

    /// Syllables in reading order
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Syllable> {
        self.syllables.iter()
    }

    /// Number of syllables
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Syllable> {
        self.syllables.get(index)
    }

    /// Syllable following `index` within the same segment
    pub fn next(&self, index: usize) -> Option<&Syllable> {
        if index >= self.syllables.len() || self.segment_ends.contains(&(index + 1)) {
            return None;
        }
        self.syllables.get(index + 1)
    }

    /// Syllables grouped by segment
    pub fn segments(&self) -> impl Iterator<Item = &[Syllable]> {
        let mut start = 0;
        self.segment_ends.iter().map(move |&end| {
            let segment = &self.syllables[start..end];
            start = end;
            segment
        })
    }

    /// Syllable texts joined by `separator`
    pub fn join(&self, separator: &str) -> String {
        self.syllables
            .iter()
            .map(Syllable::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Append the syllables of one segment
    pub(crate) fn push_segment(&mut self, syllables: Vec<Syllable>) {
        if syllables.is_empty() {
            return;
        }
        self.syllables.extend(syllables);
        self.segment_ends.push(self.syllables.len());
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("-"))
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Syllable;
    type IntoIter = std::slice::Iter<'a, Syllable>;

    fn into_iter(self) -> Self::IntoIter {
        self.syllables.iter()
    }
}
