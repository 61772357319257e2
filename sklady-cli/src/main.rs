//! Command-line entry point for sklady

use anyhow::Result;
use clap::Parser;
use sklady_cli::commands::Commands;

/// Split words into syllables with configurable language rules
#[derive(Debug, Parser)]
#[command(name = "sklady", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
    }
}
