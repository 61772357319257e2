//! CLI command implementations

use clap::Subcommand;
use sklady_core::list_available_languages;

pub mod generate_config;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split the words of text files into syllables
    Split(split::SplitArgs),

    /// Check a language configuration file
    Validate(validate::ValidateArgs),

    /// Write a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded language rules
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> anyhow::Result<()> {
        print!("{}", self.listing());
        Ok(())
    }

    fn listing(&self) -> String {
        match self {
            ListCommands::Languages => {
                let mut text = String::from("Available languages:\n");
                for code in list_available_languages() {
                    text.push_str(&format!("  {code}\n"));
                }
                text
            }
            ListCommands::Formats => String::from(
                "Available output formats:\n  \
                 text      - word=syllables lines\n  \
                 json      - JSON document with syllable structure\n  \
                 markdown  - Markdown table\n",
            ),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init()
        .ok();
}
