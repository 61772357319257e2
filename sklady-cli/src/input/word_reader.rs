//! Word extraction from running text
//!
//! A word starts with a letter and continues with letters, hyphens and
//! apostrophes; hyphens and apostrophes at either end are dropped. A line
//! ending in a hyphen continues on the next line, so words hyphenated across
//! a line break are read whole.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;

const WORD_PATTERN: &str = r"\p{L}[-'’\p{L}]*";
const EDGE_CHARS: [char; 3] = ['-', '\'', '’'];

/// Extracts words from text
#[derive(Debug, Clone)]
pub struct WordReader {
    pattern: Regex,
}

impl WordReader {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(WORD_PATTERN).context("Failed to compile word pattern")?;
        Ok(Self { pattern })
    }

    /// Words in order of appearance
    pub fn words(&self, text: &str) -> Vec<String> {
        let joined = join_hyphenated_lines(text);
        self.pattern
            .find_iter(&joined)
            .map(|m| m.as_str().trim_matches(EDGE_CHARS.as_slice()))
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Lower-cased words, each kept once in first-seen order
    pub fn unique_words(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.words(text)
            .into_iter()
            .map(|word| word.to_lowercase())
            .filter(|word| seen.insert(word.clone()))
            .collect()
    }
}

/// Join every line whose trimmed text ends in `-` with the following line
pub fn join_hyphenated_lines(text: &str) -> String {
    let mut joined = String::with_capacity(text.len());
    let mut continued = false;

    for line in text.lines() {
        let line = line.trim();
        if !continued && !joined.is_empty() {
            joined.push('\n');
        }

        match line.strip_suffix('-') {
            Some(head) => {
                joined.push_str(head);
                continued = true;
            }
            None => {
                joined.push_str(line);
                continued = false;
            }
        }
    }

    joined
}
