//! Markdown output formatter

use super::{cluster_words, OutputFormatter, BY_LENGTH, BY_WORD_COUNT};
use anyhow::Result;
use sklady_core::{BreakError, ClusterIndex, LetterCluster, Word};
use std::io::Write;

/// Markdown formatter - outputs words as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
    error_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
            error_count: 0,
        }
    }

    fn write_section(&mut self, title: &str, clusters: &[&LetterCluster]) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        for cluster in clusters {
            writeln!(
                self.writer,
                "- `{}` ({}): {}",
                cluster.key(),
                cluster.word_count(),
                cluster_words(cluster).join(", ")
            )?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(
        &mut self,
        word: &str,
        outcome: std::result::Result<&Word, &BreakError>,
    ) -> Result<()> {
        if self.word_count == 0 {
            writeln!(self.writer, "| Word | Syllables |")?;
            writeln!(self.writer, "| --- | --- |")?;
        }
        self.word_count += 1;

        match outcome {
            Ok(syllables) => writeln!(self.writer, "| {word} | {syllables} |")?,
            Err(err) => {
                self.error_count += 1;
                writeln!(self.writer, "| {word} | *{err}* |")?;
            }
        }
        Ok(())
    }

    fn format_clusters(&mut self, index: &ClusterIndex) -> Result<()> {
        self.write_section(BY_WORD_COUNT, &index.rank_by_word_count())?;
        self.write_section(BY_LENGTH, &index.rank_by_letter_count())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total words: {}, errors: {}*",
            self.word_count, self.error_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sklady_core::{LanguageConfig, SyllableBreaker};

    #[test]
    fn test_markdown_table() {
        let breaker = SyllableBreaker::from_config(&LanguageConfig::new("а,о", "б,р,н")).unwrap();
        let mut index = ClusterIndex::new();
        let mut formatter = MarkdownFormatter::new(Vec::new());

        for word in ["барабан", "бак"] {
            let outcome = breaker.break_word(word, &mut index);
            formatter.format_word(word, outcome.as_ref()).unwrap();
        }
        formatter.format_clusters(&index).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert!(output.starts_with("| Word | Syllables |\n| --- | --- |\n"));
        assert!(output.contains("| барабан | ба-ра-бан |"));
        assert!(output.contains("| бак | *Unrecognizable letter к in word бак* |"));
        assert!(output.contains("## Clusters by word count"));
        assert!(output.contains("- `б` (1): ба-ра-бан"));
        assert!(output.ends_with("*Total words: 2, errors: 1*\n"));
    }
}
