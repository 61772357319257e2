//! Syllable breaker
//!
//! Breaking a word runs in stages:
//!
//! 1. split the word on separator characters into independent parts
//! 2. apply the rewrite rules to each part
//! 3. strip known prefixes, each one broken as its own segment
//! 4. tokenize the rest into letters and group them around vowels
//! 5. divide each consonant run between neighbouring syllables
//!
//! Analysis is pure: [`SyllableBreaker::analyze`] returns the word together
//! with the consonant clusters it contained and touches no shared state.
//! Recording clusters is a separate, single-writer step, which keeps batch
//! analysis free to run in parallel.

use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::{ClusterIndex, Syllable, Word};
use crate::error::{BreakError, ConfigError};
use crate::language::tables::{Alphabet, Letter, LetterClasses};
use crate::language::{get_language_config, load_file, LanguageConfig};
use crate::rules::{PatternCompiler, RewriteRuleSet, SplitRuleSet};

/// Result of breaking one word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    word: Word,
    clusters: Vec<Vec<String>>,
}

impl Analysis {
    /// Syllabified word
    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn into_word(self) -> Word {
        self.word
    }

    /// Onsets and codas long enough to be indexed, in order of appearance
    ///
    /// These are collected before consonant runs are divided, so a coda
    /// that is later split still appears whole.
    pub fn clusters(&self) -> &[Vec<String>] {
        &self.clusters
    }
}

/// Configured syllable breaker for one language
#[derive(Debug, Clone)]
pub struct SyllableBreaker {
    name: Option<String>,
    classes: LetterClasses,
    alphabet: Alphabet,
    prefixes: Vec<String>,
    separators: Vec<char>,
    rewrite_rules: RewriteRuleSet,
    split_rules: SplitRuleSet,
    min_cluster_size: usize,
}

impl SyllableBreaker {
    /// Compile a configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let classes = LetterClasses::parse(&config.letter_classes)?;
        let alphabet = Alphabet::parse(
            config.vowels.as_deref().unwrap_or_default(),
            config.consonants.as_deref().unwrap_or_default(),
            &classes,
        )?;

        let compiler = PatternCompiler::new(&classes, &alphabet);
        let rewrite_rules = RewriteRuleSet::compile(&config.rewrite_rules, &compiler)?;
        let split_rules = SplitRuleSet::compile(
            &config.split_rules,
            config.split_delimiter,
            config.default_split,
            &compiler,
        )?;

        log::info!(
            "compiled {}: {} rewrite rules, {} split rules",
            config.name.as_deref().unwrap_or("language configuration"),
            rewrite_rules.len(),
            split_rules.len()
        );

        Ok(Self {
            name: config.name.clone(),
            prefixes: config.prefix_list(),
            separators: config.separator_chars(),
            min_cluster_size: config.min_cluster_size.max(1),
            classes,
            alphabet,
            rewrite_rules,
            split_rules,
        })
    }

    /// Breaker for an embedded language
    pub fn from_code(code: &str) -> Result<Self, ConfigError> {
        Self::from_config(get_language_config(code)?)
    }

    /// Breaker for a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_config(&load_file(path.as_ref())?)
    }

    /// Override the minimum cluster length; zero is treated as one
    pub fn with_min_cluster_size(mut self, size: usize) -> Self {
        self.min_cluster_size = size.max(1);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn classes(&self) -> &LetterClasses {
        &self.classes
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    pub fn rewrite_rules(&self) -> &RewriteRuleSet {
        &self.rewrite_rules
    }

    pub fn split_rules(&self) -> &SplitRuleSet {
        &self.split_rules
    }

    pub fn min_cluster_size(&self) -> usize {
        self.min_cluster_size
    }

    /// Apply the rewrite rules only
    pub fn rewrite(&self, text: &str) -> String {
        self.rewrite_rules.apply(text)
    }

    /// Break a word and record its clusters in `index`
    ///
    /// The index is only updated when the whole word breaks successfully.
    pub fn break_word(&self, word: &str, index: &mut ClusterIndex) -> Result<Word, BreakError> {
        let analysis = self.analyze(word)?;
        index.record(&analysis);
        Ok(analysis.into_word())
    }

    /// Break a word without recording clusters
    pub fn syllabify(&self, word: &str) -> Result<Word, BreakError> {
        self.analyze(word).map(Analysis::into_word)
    }

    /// Break a word
    pub fn analyze(&self, word: &str) -> Result<Analysis, BreakError> {
        let mut analysis = Analysis::default();

        if self.separators.is_empty() {
            self.break_part(word, word, &mut analysis)?;
        } else {
            for part in word.split(self.separators.as_slice()) {
                self.break_part(part, word, &mut analysis)?;
            }
        }

        log::trace!("{word} -> {}", analysis.word);
        Ok(analysis)
    }

    /// Break words one after another
    pub fn analyze_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<Result<Analysis, BreakError>> {
        words.iter().map(|w| self.analyze(w.as_ref())).collect()
    }

    /// Break words in parallel, results in input order
    #[cfg(feature = "parallel")]
    pub fn par_analyze_all<S: AsRef<str> + Sync>(
        &self,
        words: &[S],
    ) -> Vec<Result<Analysis, BreakError>> {
        words.par_iter().map(|w| self.analyze(w.as_ref())).collect()
    }

    /// Break words in parallel, results in input order
    #[cfg(not(feature = "parallel"))]
    pub fn par_analyze_all<S: AsRef<str> + Sync>(
        &self,
        words: &[S],
    ) -> Vec<Result<Analysis, BreakError>> {
        self.analyze_all(words)
    }

    fn break_part(
        &self,
        part: &str,
        original: &str,
        analysis: &mut Analysis,
    ) -> Result<(), BreakError> {
        if part.is_empty() {
            return Ok(());
        }

        let rewritten = self.rewrite_rules.apply(part);
        let mut rest = rewritten.as_str();

        while let Some(prefix) = self.find_prefix(rest) {
            self.break_segment(prefix, original, analysis)?;
            rest = &rest[prefix.len()..];
        }

        self.break_segment(rest, original, analysis)
    }

    fn find_prefix(&self, text: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|prefix| text.starts_with(prefix.as_str()))
            .map(String::as_str)
    }

    fn break_segment(
        &self,
        text: &str,
        original: &str,
        analysis: &mut Analysis,
    ) -> Result<(), BreakError> {
        if text.is_empty() {
            return Ok(());
        }

        let mut syllables = Vec::new();
        let mut current = Syllable::new();

        for letter in self.alphabet.tokenize(text) {
            match letter {
                Letter::Vowel(vowel) => {
                    if current.nucleus().is_none() {
                        current.set_nucleus(vowel);
                    } else {
                        syllables.push(std::mem::replace(
                            &mut current,
                            Syllable::with_nucleus(vowel),
                        ));
                    }
                }
                Letter::Consonant(consonant) => {
                    if current.nucleus().is_none() {
                        current.push_onset(consonant);
                    } else {
                        current.push_coda(consonant);
                    }
                }
                Letter::Unknown(unknown) => {
                    return Err(BreakError::UnrecognizableLetter {
                        letter: unknown.to_string(),
                        word: original.to_string(),
                    });
                }
            }
        }
        syllables.push(current);

        for syllable in &syllables {
            for run in [syllable.onset(), syllable.coda()] {
                if run.len() >= self.min_cluster_size {
                    analysis.clusters.push(run.to_vec());
                }
            }
        }

        for i in 1..syllables.len() {
            let (kept, moved) = self.split_rules.resolve(syllables[i - 1].coda())?;
            syllables[i - 1].set_coda(kept);
            syllables[i].set_onset(moved);
        }

        analysis.word.push_segment(syllables);
        Ok(())
    }
}
