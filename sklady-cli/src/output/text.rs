//! Plain text output formatter

use super::{cluster_line, OutputFormatter, BY_LENGTH, BY_WORD_COUNT};
use anyhow::Result;
use sklady_core::{BreakError, ClusterIndex, LetterCluster, Word};
use std::io::Write;

/// Plain text formatter - outputs one `word=syl-syl` line per word
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_section(&mut self, title: &str, clusters: &[&LetterCluster]) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{title}")?;
        for cluster in clusters {
            writeln!(self.writer, "{}", cluster_line(cluster))?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_word(
        &mut self,
        word: &str,
        outcome: std::result::Result<&Word, &BreakError>,
    ) -> Result<()> {
        match outcome {
            Ok(syllables) => writeln!(self.writer, "{word}={syllables}")?,
            Err(err) => writeln!(self.writer, "{word}=Error: {err}")?,
        }
        Ok(())
    }

    fn format_clusters(&mut self, index: &ClusterIndex) -> Result<()> {
        self.write_section(BY_WORD_COUNT, &index.rank_by_word_count())?;
        self.write_section(BY_LENGTH, &index.rank_by_letter_count())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
