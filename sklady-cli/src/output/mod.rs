//! Output formatting module

use anyhow::Result;
use sklady_core::{BreakError, ClusterIndex, LetterCluster, Word};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the outcome for a single word
    fn format_word(
        &mut self,
        word: &str,
        outcome: std::result::Result<&Word, &BreakError>,
    ) -> Result<()>;

    /// Format and output the cluster report
    fn format_clusters(&mut self, index: &ClusterIndex) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Section title of the ranking by word count
pub const BY_WORD_COUNT: &str = "Clusters by word count";
/// Section title of the ranking by cluster length
pub const BY_LENGTH: &str = "Clusters by length";

/// `<key> (<words>): w1, w2, ...`
pub(crate) fn cluster_line(cluster: &LetterCluster) -> String {
    format!(
        "{} ({}): {}",
        cluster.key(),
        cluster.word_count(),
        cluster_words(cluster).join(", ")
    )
}

pub(crate) fn cluster_words(cluster: &LetterCluster) -> Vec<String> {
    cluster.words().iter().map(Word::to_string).collect()
}
