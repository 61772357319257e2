//! Validate command implementation

use anyhow::Result;
use clap::Args;
use sklady_core::SyllableBreaker;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match SyllableBreaker::from_file(&self.language_config) {
            Ok(breaker) => {
                println!("✓ Configuration is valid!");
                print!("{}", summary(&breaker));
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// Human-readable overview of a compiled configuration
pub fn summary(breaker: &SyllableBreaker) -> String {
    let alphabet = breaker.alphabet();
    let mut lines = vec![
        format!("  Language name: {}", breaker.name().unwrap_or("(unnamed)")),
        format!("  Vowels: {}", alphabet.vowels().join(", ")),
        format!("  Consonants: {}", alphabet.consonants().join(", ")),
        format!("  Letter classes: {}", breaker.classes().len()),
        format!("  Rewrite rules: {}", breaker.rewrite_rules().len()),
        format!("  Split rules: {}", breaker.split_rules().len()),
        format!("  Default split: {:?}", breaker.split_rules().policy()),
    ];
    if !breaker.prefixes().is_empty() {
        lines.push(format!("  Prefixes: {}", breaker.prefixes().join(", ")));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
