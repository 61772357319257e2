//! Language source management for CLI

use anyhow::Result;
use sklady_core::SyllableBreaker;
use std::path::PathBuf;

use crate::error::CliError;

/// Embedded language used when none is given
pub const DEFAULT_LANGUAGE: &str = "uk";

/// Source of language rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Embedded configuration, by language code
    BuiltIn(String),
    /// External configuration file
    External(PathBuf),
}

impl LanguageSource {
    /// Pick the source from the `--language` and `--language-config` options
    pub fn from_args(language: Option<&str>, language_config: Option<&PathBuf>) -> Self {
        match (language_config, language) {
            (Some(path), _) => LanguageSource::External(path.clone()),
            (None, Some(code)) => LanguageSource::BuiltIn(code.to_string()),
            (None, None) => LanguageSource::BuiltIn(DEFAULT_LANGUAGE.to_string()),
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(code) => format!("Built-in: {code}"),
            LanguageSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Compile the configuration into a breaker
    pub fn load(&self) -> Result<SyllableBreaker> {
        let breaker = match self {
            LanguageSource::BuiltIn(code) => SyllableBreaker::from_code(code),
            LanguageSource::External(path) => SyllableBreaker::from_file(path),
        }
        .map_err(|e| CliError::LanguageConfig(e.to_string()))?;

        log::info!("Using language rules: {}", self.display_name());
        Ok(breaker)
    }
}
