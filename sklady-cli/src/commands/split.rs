//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use sklady_core::{Analysis, ClusterIndex};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::init_logging;
use crate::input::{resolve_patterns, FileReader, WordReader};
use crate::language_source::LanguageSource;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob); reads standard input when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Embedded language code (default: uk)
    #[arg(short, long, value_name = "CODE", conflicts_with = "language_config")]
    pub language: Option<String>,

    /// Language configuration file (TOML or JSON)
    #[arg(short = 'c', long, value_name = "FILE", env = "SKLADY_LANGUAGE_CONFIG")]
    pub language_config: Option<PathBuf>,

    /// Append the consonant cluster report
    #[arg(long)]
    pub clusters: bool,

    /// Shortest onset or coda recorded in the cluster report
    #[arg(long, value_name = "N")]
    pub min_cluster_size: Option<usize>,

    /// Split words in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel splitting
    #[arg(short, long, value_name = "N", requires = "parallel")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `word=syl-syl` line per word
    Text,
    /// JSON document with syllable structure
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Create a formatter writing to `writer`
    pub fn formatter<W>(self, writer: W) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting syllable splitting");
        log::debug!("Arguments: {:?}", self);

        let source =
            LanguageSource::from_args(self.language.as_deref(), self.language_config.as_ref());
        let mut breaker = source.load()?;
        if let Some(size) = self.min_cluster_size {
            breaker = breaker.with_min_cluster_size(size);
        }

        let text = self.read_input()?;
        let words = WordReader::new()?.unique_words(&text);
        log::info!("Read {} distinct words", words.len());

        let outcomes = if self.parallel {
            self.configure_threads()?;
            breaker.par_analyze_all(&words)
        } else {
            breaker.analyze_all(&words)
        };

        let mut formatter = self.format.formatter(self.open_output()?);
        let mut index = ClusterIndex::new();
        let mut failures = 0usize;

        for (word, outcome) in words.iter().zip(&outcomes) {
            match outcome {
                Ok(analysis) => index.record(analysis),
                Err(e) => {
                    failures += 1;
                    log::debug!("{e}");
                }
            }
            formatter.format_word(word, outcome.as_ref().map(Analysis::word))?;
        }

        if self.clusters {
            formatter.format_clusters(&index)?;
        }
        formatter.finish()?;

        log::info!(
            "Split {} words, {} failed, {} clusters",
            words.len(),
            failures,
            index.len()
        );
        Ok(())
    }

    fn read_input(&self) -> Result<String> {
        if self.input.is_empty() {
            log::info!("Reading standard input");
            return FileReader::read_stdin();
        }

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(files.len() as u64, "files");

        let mut text = String::new();
        for path in &files {
            text.push_str(&FileReader::read_text(path)?);
            text.push('\n');
            progress.item_completed(&path.display().to_string());
        }
        progress.finish();

        Ok(text)
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        })
    }

    fn configure_threads(&self) -> Result<()> {
        if let Some(threads) = self.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to configure worker threads")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>, output: PathBuf) -> SplitArgs {
        SplitArgs {
            input,
            output: Some(output),
            format: OutputFormat::Text,
            language: Some("uk".to_string()),
            language_config: None,
            clusters: false,
            min_cluster_size: None,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_split_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "Барабан і сестра. Барабан!").unwrap();

        let args = args(vec![input.display().to_string()], output.clone());
        args.execute().unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, "барабан=ба-ра-бан\nі=і\nсестра=се-стра\n");
    }

    #[test]
    fn test_word_errors_do_not_fail_the_run() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "мама hello").unwrap();

        let mut args = args(vec![input.display().to_string()], output.clone());
        args.parallel = true;
        args.clusters = true;
        args.execute().unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("мама=ма-ма\nhello=Error: Unrecognizable letter h"));
        assert!(written.contains("Clusters by word count\nм (1): ма-ма\n"));
    }

    #[test]
    fn test_missing_input_fails() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let args = args(vec![pattern], temp_dir.path().join("out.txt"));
        assert!(args.execute().is_err());
    }
}
