//! Language configuration loader
//!
//! Reads configuration documents from TOML or JSON and manages the
//! embedded language configurations.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use super::config::LanguageConfig;
use crate::error::ConfigError;

static LANGUAGE_CONFIGS: OnceLock<Result<HashMap<&'static str, LanguageConfig>, ConfigError>> =
    OnceLock::new();

/// Embedded language configuration
struct EmbeddedLanguage {
    /// Codes the language answers to, primary code first
    codes: &'static [&'static str],
    /// TOML document
    source: &'static str,
}

macro_rules! embed_language_config {
    ($codes:expr, $path:expr) => {
        EmbeddedLanguage {
            codes: $codes,
            source: include_str!($path),
        }
    };
}

const EMBEDDED: &[EmbeddedLanguage] = &[embed_language_config!(
    &["uk", "ukrainian"],
    "../../configs/languages/ukrainian.toml"
)];

/// Parse a TOML configuration document
pub fn from_toml_str(content: &str, source_name: &str) -> Result<LanguageConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

/// Parse a JSON configuration document
pub fn from_json_str(content: &str, source_name: &str) -> Result<LanguageConfig, ConfigError> {
    serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

/// Load a configuration file
///
/// Files ending in `.json` are read as JSON, everything else as TOML.
pub fn load_file(path: &Path) -> Result<LanguageConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let source_name = path.display().to_string();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        from_json_str(&content, &source_name)?
    } else {
        from_toml_str(&content, &source_name)?
    };

    log::debug!("loaded language configuration from {source_name}");
    config.validate()?;
    Ok(config)
}

fn load_embedded_configs() -> Result<HashMap<&'static str, LanguageConfig>, ConfigError> {
    let mut configs = HashMap::new();

    for language in EMBEDDED {
        let primary = language.codes.first().copied().unwrap_or("embedded");
        let config = from_toml_str(language.source, primary)?;
        config.validate()?;

        for code in language.codes {
            configs.insert(*code, config.clone());
        }
    }

    Ok(configs)
}

/// Embedded configuration for a language code
pub fn get_language_config(code: &str) -> Result<&'static LanguageConfig, ConfigError> {
    let configs = LANGUAGE_CONFIGS
        .get_or_init(load_embedded_configs)
        .as_ref()
        .map_err(Clone::clone)?;

    configs
        .get(code)
        .ok_or_else(|| ConfigError::UnsupportedLanguage(code.to_string()))
}

/// Primary codes of the embedded languages
pub fn list_available_languages() -> Vec<&'static str> {
    EMBEDDED
        .iter()
        .filter_map(|language| language.codes.first().copied())
        .collect()
}
