//! JSON output formatter

use super::{cluster_words, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use sklady_core::{BreakError, ClusterIndex, LetterCluster, Syllable, Word};
use std::io::Write;

/// JSON formatter - collects every word and writes one document at the end
pub struct JsonFormatter<W: Write> {
    writer: W,
    report: Report,
}

/// Complete JSON document
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Report {
    /// Per-word results in input order
    pub words: Vec<WordData>,
    /// Cluster rankings, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<ClusterReport>,
}

/// Result for one word
#[derive(Debug, Serialize, Deserialize)]
pub struct WordData {
    /// The word as read
    pub word: String,
    /// Syllable texts
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub syllables: Vec<String>,
    /// Onset, nucleus and coda of each syllable
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub structure: Vec<SyllableData>,
    /// Error message for a word that could not be split
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Letters of one syllable
#[derive(Debug, Serialize, Deserialize)]
pub struct SyllableData {
    pub onset: Vec<String>,
    pub nucleus: Option<String>,
    pub coda: Vec<String>,
}

impl From<&Syllable> for SyllableData {
    fn from(syllable: &Syllable) -> Self {
        Self {
            onset: syllable.onset().to_vec(),
            nucleus: syllable.nucleus().map(str::to_string),
            coda: syllable.coda().to_vec(),
        }
    }
}

/// Both cluster rankings
#[derive(Debug, Serialize, Deserialize)]
pub struct ClusterReport {
    pub by_word_count: Vec<ClusterData>,
    pub by_length: Vec<ClusterData>,
}

/// One consonant cluster
#[derive(Debug, Serialize, Deserialize)]
pub struct ClusterData {
    pub key: String,
    pub letters: Vec<String>,
    pub words: Vec<String>,
}

impl From<&LetterCluster> for ClusterData {
    fn from(cluster: &LetterCluster) -> Self {
        Self {
            key: cluster.key().to_string(),
            letters: cluster.letters().to_vec(),
            words: cluster_words(cluster),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report: Report::default(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_word(
        &mut self,
        word: &str,
        outcome: std::result::Result<&Word, &BreakError>,
    ) -> Result<()> {
        let data = match outcome {
            Ok(syllables) => WordData {
                word: word.to_string(),
                syllables: syllables.iter().map(Syllable::to_string).collect(),
                structure: syllables.iter().map(SyllableData::from).collect(),
                error: None,
            },
            Err(err) => WordData {
                word: word.to_string(),
                syllables: Vec::new(),
                structure: Vec::new(),
                error: Some(err.to_string()),
            },
        };
        self.report.words.push(data);
        Ok(())
    }

    fn format_clusters(&mut self, index: &ClusterIndex) -> Result<()> {
        let convert = |clusters: Vec<&LetterCluster>| -> Vec<ClusterData> {
            clusters.into_iter().map(ClusterData::from).collect()
        };
        self.report.clusters = Some(ClusterReport {
            by_word_count: convert(index.rank_by_word_count()),
            by_length: convert(index.rank_by_letter_count()),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
