//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Display name written into the template
    #[arg(short, long, value_name = "NAME", default_value = "Custom Language")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating language configuration template...");
        println!("  Language name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to describe your alphabet and rules");
        println!("2. Validate your configuration:");
        println!(
            "   sklady validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for splitting:");
        println!(
            "   sklady split -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    fn generate_template(&self) -> String {
        format!(
            r#"# Syllable splitting rules for {name}

Name = "{name}"

# Comma-separated letters. Multi-character letters (digraphs) are allowed
# and are matched in the order given, so list them before their prefixes.
# Letter class names may stand in for their members.
Vowels = "a,e,i,o,u"
Consonants = "Son,Obs"

# Prefixes that always form syllables of their own (optional)
Prefixes = ""

# Characters that split a word into independently syllabified parts
Separators = "-"

# Named letter classes: Name=letter,letter,...
# Class names are referenced from rules by name.
LetterClasses = [
    "Son=l,m,n,r",
    "Obs=b,c,d,f,g,h,k,p,s,t,v,z",
]

# Spelling normalizations applied before splitting, in order:
#   search/replacement[/context]
# A class in the search term maps position by position onto a class of the
# same length in the replacement. The context term marks the searched text
# with '_', '.' matches any single letter.
RewriteRules = [
    # "ph/f",
]

# How consonants between two vowels are divided, first match wins:
#   coda|onset
# '.' matches any single letter, '+' repeats the previous item.
SplitRules = [
    "|Obs+Son",
    "Son|.+",
]

# Division used when no split rule matches: "move-last" gives the last
# consonant to the next syllable, "keep-coda" gives all of them.
DefaultSplit = "move-last"

# Shortest onset or coda recorded in the cluster report
MinClusterSize = 1
"#,
            name = escape_toml(&self.name)
        )
    }
}

/// Escape text for a basic TOML string
fn escape_toml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
