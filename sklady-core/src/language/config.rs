//! Configuration structures and validation
//!
//! This module defines the configuration document schema. The same keys are
//! accepted from TOML and JSON; keys are PascalCase with snake_case aliases.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::split::BoundaryPolicy;

/// Root language configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageConfig {
    /// Display name of the language
    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Comma-joined vowel letters, may embed letter class names
    #[serde(default, alias = "vowels", skip_serializing_if = "Option::is_none")]
    pub vowels: Option<String>,

    /// Comma-joined consonant letters, may embed letter class names
    #[serde(default, alias = "consonants", skip_serializing_if = "Option::is_none")]
    pub consonants: Option<String>,

    /// Comma-joined prefixes that always form their own syllables
    #[serde(default, alias = "prefixes", skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<String>,

    /// Characters that split a word into independently processed parts
    #[serde(default, alias = "separators", skip_serializing_if = "Option::is_none")]
    pub separators: Option<String>,

    /// `name=item,item,...` declarations
    #[serde(default, alias = "letter_classes")]
    pub letter_classes: Vec<String>,

    /// `search/replacement[/context]` rules
    #[serde(default, alias = "rewrite_rules")]
    pub rewrite_rules: Vec<String>,

    /// `coda|onset` or `coda/onset` rules
    #[serde(default, alias = "split_rules")]
    pub split_rules: Vec<String>,

    /// Explicit delimiter between coda and onset terms of split rules
    #[serde(
        default,
        alias = "split_delimiter",
        skip_serializing_if = "Option::is_none"
    )]
    pub split_delimiter: Option<char>,

    /// Boundary policy when no split rule matches
    #[serde(default, alias = "default_split")]
    pub default_split: BoundaryPolicy,

    /// Minimum onset/coda length recorded in the cluster index
    #[serde(default = "default_min_cluster_size", alias = "min_cluster_size")]
    pub min_cluster_size: usize,
}

fn default_min_cluster_size() -> usize {
    1
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            name: None,
            vowels: None,
            consonants: None,
            prefixes: None,
            separators: None,
            letter_classes: Vec::new(),
            rewrite_rules: Vec::new(),
            split_rules: Vec::new(),
            split_delimiter: None,
            default_split: BoundaryPolicy::default(),
            min_cluster_size: default_min_cluster_size(),
        }
    }
}

impl LanguageConfig {
    /// Create a configuration from vowel and consonant strings
    pub fn new(vowels: impl Into<String>, consonants: impl Into<String>) -> Self {
        Self {
            vowels: Some(vowels.into()),
            consonants: Some(consonants.into()),
            ..Self::default()
        }
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vowels.as_deref().map_or(true, |v| v.trim().is_empty()) {
            return Err(ConfigError::MissingField("Vowels"));
        }

        if self
            .consonants
            .as_deref()
            .map_or(true, |c| c.trim().is_empty())
        {
            return Err(ConfigError::MissingField("Consonants"));
        }

        if let Some(delimiter) = self.split_delimiter {
            if delimiter != '|' && delimiter != '/' {
                return Err(ConfigError::Parse {
                    source_name: "SplitDelimiter".to_string(),
                    message: format!("expected '|' or '/', got '{delimiter}'"),
                });
            }
        }

        Ok(())
    }

    /// Configured prefixes in declaration order, empty entries dropped
    pub fn prefix_list(&self) -> Vec<String> {
        self.prefixes
            .as_deref()
            .map(|p| {
                p.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Configured separator characters
    pub fn separator_chars(&self) -> Vec<char> {
        self.separators
            .as_deref()
            .map(|s| s.chars().collect())
            .unwrap_or_default()
    }
}
