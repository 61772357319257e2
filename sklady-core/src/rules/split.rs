//! Split rules
//!
//! A split rule `coda|onset` describes how the consonants between two
//! vowels divide: the letters matched by the coda term stay with the
//! earlier syllable, the letters matched by the onset term move to the
//! later one. Terms match the whole consonant run, and the first rule in
//! declaration order that matches wins. When no rule matches, the
//! configured [`BoundaryPolicy`] decides.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::pattern::{
    decode_letters, encode_letters, Encoding, PatternCompiler, CODA_GROUP, ONSET_GROUP,
};
use crate::error::{BreakError, ConfigError};

const DELIMITERS: [char; 2] = ['|', '/'];

/// Division used when no split rule matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
    /// Last consonant opens the next syllable, the rest stay in the coda
    #[default]
    #[serde(alias = "MoveLast")]
    MoveLast,
    /// Whole consonant run stays in the coda
    #[serde(alias = "KeepCoda")]
    KeepCoda,
}

impl BoundaryPolicy {
    /// Divide `coda` into the kept part and the part moved to the next onset
    pub fn split(self, coda: &[String]) -> (Vec<String>, Vec<String>) {
        match self {
            BoundaryPolicy::KeepCoda => (coda.to_vec(), Vec::new()),
            BoundaryPolicy::MoveLast => match coda.split_last() {
                Some((last, kept)) => (kept.to_vec(), vec![last.clone()]),
                None => (Vec::new(), Vec::new()),
            },
        }
    }
}

/// Compiled split rule
#[derive(Debug, Clone)]
pub struct SplitRule {
    source: String,
    regex: Regex,
}

impl SplitRule {
    /// Compile one rule
    ///
    /// Returns `None` for a rule whose terms are both empty.
    pub fn compile(
        rule: &str,
        delimiter: char,
        compiler: &PatternCompiler<'_>,
    ) -> Result<Option<Self>, ConfigError> {
        let terms: Vec<&str> = rule.split(delimiter).collect();
        let [coda_text, onset_text] = terms.as_slice() else {
            return Err(ConfigError::RuleArity {
                kind: "split",
                rule: rule.to_string(),
            });
        };

        let coda = compiler.parse(coda_text);
        let onset = compiler.parse(onset_text);
        if coda.is_empty() && onset.is_empty() {
            log::debug!("split rule {rule} has no terms, skipping");
            return Ok(None);
        }

        let mut pattern = String::from("^");
        if !coda.is_empty() {
            pattern.push_str(&format!(
                "(?P<{CODA_GROUP}>{})",
                coda.render(Encoding::Bracketed)
            ));
        }
        if !onset.is_empty() {
            pattern.push_str(&format!(
                "(?P<{ONSET_GROUP}>{})",
                onset.render(Encoding::Bracketed)
            ));
        }
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|e| ConfigError::InvalidPattern {
            rule: rule.to_string(),
            message: e.to_string(),
        })?;

        log::debug!("split rule {rule} compiled to {pattern}");

        Ok(Some(Self {
            source: rule.to_string(),
            regex,
        }))
    }

    /// Rule text as configured
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Divide a bracketed consonant run, if the rule matches it
    pub fn split(&self, encoded: &str) -> Result<Option<(Vec<String>, Vec<String>)>, BreakError> {
        let Some(caps) = self.regex.captures(encoded) else {
            return Ok(None);
        };

        let group = |name: &str| -> Result<Vec<String>, BreakError> {
            caps.name(name)
                .map(|m| decode_letters(m.as_str()))
                .transpose()
                .map(Option::unwrap_or_default)
        };

        Ok(Some((group(CODA_GROUP)?, group(ONSET_GROUP)?)))
    }
}

/// Ordered split rules of a language plus the fallback policy
#[derive(Debug, Clone, Default)]
pub struct SplitRuleSet {
    rules: Vec<SplitRule>,
    policy: BoundaryPolicy,
}

impl SplitRuleSet {
    /// Compile rules in order
    ///
    /// Without an explicit delimiter, `|` is used when every rule splits on
    /// it into two terms, otherwise `/` when every rule splits on that.
    pub fn compile<S: AsRef<str>>(
        rules: &[S],
        delimiter: Option<char>,
        policy: BoundaryPolicy,
        compiler: &PatternCompiler<'_>,
    ) -> Result<Self, ConfigError> {
        let delimiter = delimiter
            .or_else(|| infer_delimiter(rules))
            .unwrap_or(DELIMITERS[0]);

        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            if let Some(rule) = SplitRule::compile(rule.as_ref(), delimiter, compiler)? {
                compiled.push(rule);
            }
        }

        Ok(Self {
            rules: compiled,
            policy,
        })
    }

    /// Fallback policy
    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Rules in match order
    pub fn iter(&self) -> impl Iterator<Item = &SplitRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Divide a coda into the kept letters and the next syllable's onset
    pub fn resolve(&self, coda: &[String]) -> Result<(Vec<String>, Vec<String>), BreakError> {
        let encoded = encode_letters(coda);

        for rule in &self.rules {
            if let Some(division) = rule.split(&encoded)? {
                log::trace!("{encoded} divided by split rule {}", rule.source());
                return Ok(division);
            }
        }

        Ok(self.policy.split(coda))
    }
}

fn infer_delimiter<S: AsRef<str>>(rules: &[S]) -> Option<char> {
    DELIMITERS
        .into_iter()
        .find(|&delimiter| rules.iter().all(|r| r.as_ref().split(delimiter).count() == 2))
}
