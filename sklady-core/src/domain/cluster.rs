//! Consonant cluster index
//!
//! Collects the onsets and codas seen while breaking words, keyed by their
//! letters joined with a space, together with the words they occurred in.
//! Only fully broken words are registered.

use std::collections::HashMap;

use super::syllable::Word;
use crate::breaker::Analysis;

/// Consonant run observed in one or more words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCluster {
    key: String,
    letters: Vec<String>,
    words: Vec<Word>,
}

impl LetterCluster {
    /// Index key: letters joined with a space
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    /// Distinct words the cluster occurred in, first occurrence first
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Key under which a consonant run is indexed
pub fn cluster_key<S: AsRef<str>>(letters: &[S]) -> String {
    letters
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}

/// All clusters seen so far, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct ClusterIndex {
    clusters: Vec<LetterCluster>,
    by_key: HashMap<String, usize>,
}

impl ClusterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `letters` occurred in `word`
    ///
    /// The same word is listed once per cluster no matter how often it is
    /// registered.
    pub fn register<S: AsRef<str>>(&mut self, letters: &[S], word: &Word) {
        let key = cluster_key(letters);

        let index = match self.by_key.get(&key) {
            Some(&index) => index,
            None => {
                self.by_key.insert(key.clone(), self.clusters.len());
                self.clusters.push(LetterCluster {
                    key,
                    letters: letters.iter().map(|l| l.as_ref().to_string()).collect(),
                    words: Vec::new(),
                });
                self.clusters.len() - 1
            }
        };

        let cluster = &mut self.clusters[index];
        if !cluster.words.contains(word) {
            cluster.words.push(word.clone());
        }
    }

    /// Register every cluster of a successful analysis
    pub fn record(&mut self, analysis: &Analysis) {
        for letters in analysis.clusters() {
            self.register(letters, analysis.word());
        }
    }

    pub fn get(&self, key: &str) -> Option<&LetterCluster> {
        self.by_key.get(key).map(|&i| &self.clusters[i])
    }

    /// Clusters in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &LetterCluster> {
        self.clusters.iter()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn clear(&mut self) {
        self.clusters.clear();
        self.by_key.clear();
    }

    /// Clusters by descending number of words, ties in first-seen order
    pub fn rank_by_word_count(&self) -> Vec<&LetterCluster> {
        let mut ranked: Vec<&LetterCluster> = self.clusters.iter().collect();
        ranked.sort_by(|a, b| b.word_count().cmp(&a.word_count()));
        ranked
    }

    /// Clusters by descending number of letters, ties in first-seen order
    pub fn rank_by_letter_count(&self) -> Vec<&LetterCluster> {
        let mut ranked: Vec<&LetterCluster> = self.clusters.iter().collect();
        ranked.sort_by(|a, b| b.letters.len().cmp(&a.letters.len()));
        ranked
    }
}
