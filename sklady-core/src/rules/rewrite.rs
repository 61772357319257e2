//! Rewrite rules
//!
//! A rewrite rule has the form `search/replacement` or
//! `search/replacement/context`. Without a context every match of the search
//! term is replaced. With a context, the context must match around the
//! search term, which takes the place of the single `_` marker, and only the
//! marker part of the match is replaced.
//!
//! A replacement may name one letter class. The search term must then name
//! exactly one class as well, and each matched member is swapped for the
//! member at the same position in the replacement class.
//!
//! Rules run over plain word text, in declaration order, each one over the
//! output of the previous one.

use std::borrow::Cow;

use regex::{Captures, Regex};

use super::pattern::{Encoding, PatternCompiler, MEMBER_GROUP, SPAN_GROUP};
use crate::error::ConfigError;
use crate::language::tables::LetterClass;

#[derive(Debug, Clone)]
enum Replacement {
    /// Fixed text
    Literal(String),
    /// Member of `target` at the position of the matched `search` member,
    /// surrounded by the replacement's literal text
    Mapped {
        search: LetterClass,
        target: LetterClass,
        before: String,
        after: String,
    },
}

/// Compiled rewrite rule
#[derive(Debug, Clone)]
pub struct RewriteRule {
    source: String,
    regex: Regex,
    replacement: Replacement,
}

impl RewriteRule {
    /// Compile one rule
    pub fn compile(rule: &str, compiler: &PatternCompiler<'_>) -> Result<Self, ConfigError> {
        let terms: Vec<&str> = rule.split('/').collect();
        let (search_text, replacement_text, context_text) = match terms.as_slice() {
            [search, replacement] => (*search, *replacement, None),
            [search, replacement, context] => (*search, *replacement, Some(*context)),
            _ => {
                return Err(ConfigError::RuleArity {
                    kind: "rewrite",
                    rule: rule.to_string(),
                })
            }
        };

        let search = compiler.parse(search_text);
        let target_classes = compiler.classes().occurrences(replacement_text);

        let (search_regex, replacement) = match target_classes.as_slice() {
            [] => (
                search.render(Encoding::Plain),
                Replacement::Literal(replacement_text.to_string()),
            ),
            [target] => {
                let search_classes: Vec<&LetterClass> = search.classes().collect();
                let search_class = match search_classes.as_slice() {
                    [] => return Err(ConfigError::MissingSearchClass(rule.to_string())),
                    [class] => *class,
                    _ => {
                        return Err(ConfigError::AmbiguousClass {
                            rule: rule.to_string(),
                            detail: "search term names more than one letter class".to_string(),
                        })
                    }
                };

                if target.class.len() < search_class.len() {
                    return Err(ConfigError::ClassLengthMismatch {
                        rule: rule.to_string(),
                        search: search_class.name().to_string(),
                        replacement: target.class.name().to_string(),
                    });
                }

                (
                    search.render_capturing_class(Encoding::Plain),
                    Replacement::Mapped {
                        search: search_class.clone(),
                        target: target.class.clone(),
                        before: replacement_text[..target.start].to_string(),
                        after: replacement_text[target.end..].to_string(),
                    },
                )
            }
            _ => {
                return Err(ConfigError::AmbiguousClass {
                    rule: rule.to_string(),
                    detail: "replacement term names more than one letter class".to_string(),
                })
            }
        };

        let pattern = match context_text {
            None => format!("(?P<{SPAN_GROUP}>{search_regex})"),
            Some(context_text) => {
                let context = compiler.parse_context(context_text);
                match context.marker_count() {
                    0 => return Err(ConfigError::MissingMarker(rule.to_string())),
                    1 => context.render_context(Encoding::Plain, &search_regex),
                    _ => {
                        return Err(ConfigError::AmbiguousClass {
                            rule: rule.to_string(),
                            detail: "context has more than one substitution marker".to_string(),
                        })
                    }
                }
            }
        };

        let regex = Regex::new(&pattern).map_err(|e| ConfigError::InvalidPattern {
            rule: rule.to_string(),
            message: e.to_string(),
        })?;

        log::debug!("rewrite rule {rule} compiled to {pattern}");

        Ok(Self {
            source: rule.to_string(),
            regex,
            replacement,
        })
    }

    /// Rule text as configured
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Rewrite every match in `text`
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| self.substitute(caps))
    }

    fn substitute(&self, caps: &Captures<'_>) -> String {
        let Some(whole) = caps.get(0) else {
            return String::new();
        };
        let Some(span) = caps.name(SPAN_GROUP) else {
            return whole.as_str().to_string();
        };

        let inserted = match &self.replacement {
            Replacement::Literal(text) => Cow::Borrowed(text.as_str()),
            Replacement::Mapped {
                search,
                target,
                before,
                after,
            } => {
                let letter = caps
                    .name(MEMBER_GROUP)
                    .and_then(|member| search.position(member.as_str()))
                    .and_then(|index| target.letters().get(index));
                match letter {
                    Some(letter) => Cow::Owned(format!("{before}{letter}{after}")),
                    None => return whole.as_str().to_string(),
                }
            }
        };

        let matched = whole.as_str();
        let start = span.start() - whole.start();
        let end = span.end() - whole.start();
        format!("{}{}{}", &matched[..start], inserted, &matched[end..])
    }
}

/// Ordered rewrite rules of a language
#[derive(Debug, Clone, Default)]
pub struct RewriteRuleSet {
    rules: Vec<RewriteRule>,
}

impl RewriteRuleSet {
    /// Compile rules in order, stopping at the first invalid one
    pub fn compile<S: AsRef<str>>(
        rules: &[S],
        compiler: &PatternCompiler<'_>,
    ) -> Result<Self, ConfigError> {
        let rules = rules
            .iter()
            .map(|rule| RewriteRule::compile(rule.as_ref(), compiler))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Run every rule over `text` in order
    pub fn apply(&self, text: &str) -> String {
        let mut rewritten = text.to_string();
        for rule in &self.rules {
            let next = rule.apply(&rewritten).into_owned();
            if next != rewritten {
                log::trace!("{} rewrote {rewritten} to {next}", rule.source());
            }
            rewritten = next;
        }
        rewritten
    }

    /// Rules in application order
    pub fn iter(&self) -> impl Iterator<Item = &RewriteRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
