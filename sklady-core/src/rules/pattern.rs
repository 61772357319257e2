//! Rule pattern compiler
//!
//! Rule patterns are written in a small language: letter class names,
//! alphabet letters, the `.` wildcard, and any other character, which is
//! copied into the regex verbatim so rules can use `^`, `$`, `*`, `+`, `?`
//! and groups. Patterns are parsed into a typed representation first and
//! rendered into a regex afterwards, either over plain text or over the
//! bracketed-letter encoding in which every letter is written as `[letter]`.
//! The bracketed form keeps multi-character letters from being matched
//! partially.

use crate::error::BreakError;
use crate::language::tables::{Alphabet, LetterClass, LetterClasses};

/// Capture group holding the part of a rewrite match that gets replaced
pub const SPAN_GROUP: &str = "span";
/// Capture group holding the concrete class member matched by a rewrite rule
pub const MEMBER_GROUP: &str = "member";
/// Capture group holding the letters a split rule keeps in the coda
pub const CODA_GROUP: &str = "coda";
/// Capture group holding the letters a split rule moves to the next onset
pub const ONSET_GROUP: &str = "onset";

/// Character marking the substitution point inside a rewrite context
pub const SUBSTITUTION_MARKER: char = '_';

/// Text a compiled pattern runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Word text as is
    Plain,
    /// Every letter written as `[letter]`
    Bracketed,
}

/// Element of a parsed pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    /// Any member of a letter class
    Class(LetterClass),
    /// One alphabet letter
    Letter(String),
    /// Any single letter
    Any,
    /// Substitution point of a rewrite context
    Marker,
    /// Character copied into the regex verbatim
    Raw(char),
}

/// Parsed rule pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    atoms: Vec<Atom>,
}

impl Pattern {
    /// Pattern elements in order
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// True for a pattern parsed from empty text
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Letter classes referenced by the pattern, in order of appearance
    pub fn classes(&self) -> impl Iterator<Item = &LetterClass> {
        self.atoms.iter().filter_map(|atom| match atom {
            Atom::Class(class) => Some(class),
            _ => None,
        })
    }

    /// Number of substitution markers
    pub fn marker_count(&self) -> usize {
        self.atoms
            .iter()
            .filter(|atom| matches!(atom, Atom::Marker))
            .count()
    }

    /// Render into regex source
    pub fn render(&self, encoding: Encoding) -> String {
        self.render_with(encoding, None, None)
    }

    /// Render, capturing the class member under [`MEMBER_GROUP`]
    ///
    /// Only the first class occurrence is captured.
    pub fn render_capturing_class(&self, encoding: Encoding) -> String {
        self.render_with(encoding, Some(MEMBER_GROUP), None)
    }

    /// Render a context, putting `inner` at the marker under [`SPAN_GROUP`]
    pub fn render_context(&self, encoding: Encoding, inner: &str) -> String {
        self.render_with(encoding, None, Some(inner))
    }

    fn render_with(&self, encoding: Encoding, member: Option<&str>, marker: Option<&str>) -> String {
        let mut out = String::new();
        let mut member = member;

        for atom in &self.atoms {
            match atom {
                Atom::Class(class) => {
                    let alternatives: Vec<String> = class
                        .letters()
                        .iter()
                        .map(|letter| render_letter(letter, encoding))
                        .collect();
                    match member.take() {
                        Some(group) => out.push_str(&format!("(?P<{group}>")),
                        None => out.push_str("(?:"),
                    }
                    out.push_str(&alternatives.join("|"));
                    out.push(')');
                }
                Atom::Letter(letter) => {
                    out.push_str("(?:");
                    out.push_str(&render_letter(letter, encoding));
                    out.push(')');
                }
                Atom::Any => match encoding {
                    Encoding::Plain => out.push('.'),
                    Encoding::Bracketed => out.push_str(r"(?:\[[^\]]+\])"),
                },
                Atom::Marker => match marker {
                    Some(inner) => out.push_str(&format!("(?P<{SPAN_GROUP}>{inner})")),
                    None => out.push_str(&regex::escape(&SUBSTITUTION_MARKER.to_string())),
                },
                Atom::Raw(ch) => out.push(*ch),
            }
        }

        out
    }
}

fn render_letter(letter: &str, encoding: Encoding) -> String {
    match encoding {
        Encoding::Plain => regex::escape(letter),
        Encoding::Bracketed => format!(r"\[{}\]", regex::escape(letter)),
    }
}

/// Parses rule text against a language's classes and alphabet
#[derive(Debug, Clone, Copy)]
pub struct PatternCompiler<'a> {
    classes: &'a LetterClasses,
    alphabet: &'a Alphabet,
}

impl<'a> PatternCompiler<'a> {
    /// Create a compiler for one language
    pub fn new(classes: &'a LetterClasses, alphabet: &'a Alphabet) -> Self {
        Self { classes, alphabet }
    }

    /// Letter classes known to the compiler
    pub fn classes(&self) -> &'a LetterClasses {
        self.classes
    }

    /// Parse a search, coda or onset term
    pub fn parse(&self, text: &str) -> Pattern {
        self.parse_inner(text, false)
    }

    /// Parse a rewrite context, where `_` marks the substitution point
    pub fn parse_context(&self, text: &str) -> Pattern {
        self.parse_inner(text, true)
    }

    fn parse_inner(&self, text: &str, context: bool) -> Pattern {
        let mut atoms = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];

            if context && rest.starts_with(SUBSTITUTION_MARKER) {
                atoms.push(Atom::Marker);
                pos += SUBSTITUTION_MARKER.len_utf8();
            } else if let Some(class) = self.classes.match_at(rest) {
                atoms.push(Atom::Class(class.clone()));
                pos += class.name().len();
            } else if let Some((letter, _)) = self.alphabet.match_at(rest) {
                atoms.push(Atom::Letter(letter.to_string()));
                pos += letter.len();
            } else if let Some(ch) = rest.chars().next() {
                atoms.push(if ch == '.' { Atom::Any } else { Atom::Raw(ch) });
                pos += ch.len_utf8();
            } else {
                break;
            }
        }

        Pattern { atoms }
    }
}

/// Write letters in the bracketed encoding
pub fn encode_letters<S: AsRef<str>>(letters: &[S]) -> String {
    letters
        .iter()
        .map(|letter| format!("[{}]", letter.as_ref()))
        .collect()
}

/// Read letters back from the bracketed encoding
pub fn decode_letters(encoded: &str) -> Result<Vec<String>, BreakError> {
    let mut letters = Vec::new();
    let mut rest = encoded;

    while !rest.is_empty() {
        let inner = rest
            .strip_prefix('[')
            .ok_or_else(|| BreakError::MalformedCluster(encoded.to_string()))?;
        let close = inner
            .find(']')
            .filter(|&close| close > 0)
            .ok_or_else(|| BreakError::MalformedCluster(encoded.to_string()))?;

        letters.push(inner[..close].to_string());
        rest = &inner[close + 1..];
    }

    Ok(letters)
}
