//! Letter class table
//!
//! Parses `name=item,item,...` declarations into named, ordered groups of
//! letters that rules and alphabet strings can refer to by name.

use std::collections::HashMap;

use crate::error::ConfigError;

/// Named, ordered group of interchangeable letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterClass {
    name: String,
    letters: Vec<String>,
}

impl LetterClass {
    /// Class name as declared
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member letters in declaration order
    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    /// Position of `letter` within the class
    pub fn position(&self, letter: &str) -> Option<usize> {
        self.letters.iter().position(|l| l == letter)
    }

    /// Number of member letters
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a parsed class
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Occurrence of a class name inside a piece of rule text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassOccurrence<'a> {
    /// Byte offset where the name starts
    pub start: usize,
    /// Byte offset just past the name
    pub end: usize,
    /// The referenced class
    pub class: &'a LetterClass,
}

/// All letter classes of a language, in declaration order
#[derive(Debug, Clone, Default)]
pub struct LetterClasses {
    classes: Vec<LetterClass>,
    by_name: HashMap<String, usize>,
}

impl LetterClasses {
    /// Parse class declarations
    pub fn parse<S: AsRef<str>>(declarations: &[S]) -> Result<Self, ConfigError> {
        let mut table = Self::default();

        for declaration in declarations {
            let declaration = declaration.as_ref();
            let terms: Vec<&str> = declaration.split('=').collect();
            if terms.len() != 2 || terms[0].trim().is_empty() {
                return Err(ConfigError::MalformedLetterClass(declaration.to_string()));
            }

            let name = terms[0].trim().to_string();
            if table.by_name.contains_key(&name) {
                return Err(ConfigError::DuplicateLetterClass(name));
            }

            let letters: Vec<String> = terms[1]
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if letters.is_empty() {
                return Err(ConfigError::EmptyLetterClass(name));
            }

            log::debug!("letter class {name} = {letters:?}");
            table.by_name.insert(name.clone(), table.classes.len());
            table.classes.push(LetterClass { name, letters });
        }

        Ok(table)
    }

    /// Look up a class by name
    pub fn get(&self, name: &str) -> Option<&LetterClass> {
        self.by_name.get(name).map(|&i| &self.classes[i])
    }

    /// Iterate classes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &LetterClass> {
        self.classes.iter()
    }

    /// Number of declared classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True if no class is declared
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class whose name is a prefix of `text`
    ///
    /// When several names match, the longest wins; among names of equal
    /// length the first declared wins.
    pub fn match_at(&self, text: &str) -> Option<&LetterClass> {
        self.classes
            .iter()
            .filter(|c| text.starts_with(c.name.as_str()))
            .fold(None, |best: Option<&LetterClass>, c| match best {
                Some(b) if b.name.len() >= c.name.len() => Some(b),
                _ => Some(c),
            })
    }

    /// Non-overlapping class name occurrences, scanned left to right
    pub fn occurrences<'a>(&'a self, text: &str) -> Vec<ClassOccurrence<'a>> {
        let mut found = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            if let Some(class) = self.match_at(&text[pos..]) {
                let end = pos + class.name.len();
                found.push(ClassOccurrence {
                    start: pos,
                    end,
                    class,
                });
                pos = end;
            } else {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }

        found
    }

    /// Replace every class name in `text` by its comma-joined members
    pub fn expand_inline(&self, text: &str) -> String {
        let mut expanded = String::with_capacity(text.len());
        let mut last = 0;

        for occurrence in self.occurrences(text) {
            expanded.push_str(&text[last..occurrence.start]);
            expanded.push_str(&occurrence.class.letters.join(","));
            last = occurrence.end;
        }
        expanded.push_str(&text[last..]);

        expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classes() {
        let table = LetterClasses::parse(&["V=а,о,у", "Гл=п,т,к"]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("V").unwrap().letters(), ["а", "о", "у"]);
        assert_eq!(table.get("Гл").unwrap().position("т"), Some(1));
        assert!(table.get("X").is_none());
    }

    #[test]
    fn test_duplicate_class_is_rejected() {
        let err = LetterClasses::parse(&["V=а", "V=о"]).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateLetterClass("V".to_string()));
    }

    #[test]
    fn test_malformed_and_empty_classes() {
        assert!(matches!(
            LetterClasses::parse(&["V"]),
            Err(ConfigError::MalformedLetterClass(_))
        ));
        assert!(matches!(
            LetterClasses::parse(&["V=a=b"]),
            Err(ConfigError::MalformedLetterClass(_))
        ));
        assert!(matches!(
            LetterClasses::parse(&["=a"]),
            Err(ConfigError::MalformedLetterClass(_))
        ));
        assert_eq!(
            LetterClasses::parse(&["V=,"]).unwrap_err(),
            ConfigError::EmptyLetterClass("V".to_string())
        );
    }

    #[test]
    fn test_longest_name_wins() {
        let table = LetterClasses::parse(&["S=с", "Son=м,н"]).unwrap();
        assert_eq!(table.match_at("Sonx").unwrap().name(), "Son");
        assert_eq!(table.match_at("Sx").unwrap().name(), "S");
        assert!(table.match_at("x").is_none());
    }

    #[test]
    fn test_occurrences_and_inline_expansion() {
        let table = LetterClasses::parse(&["Дз=б,д", "Гл=п,т"]).unwrap();
        let occurrences = table.occurrences("аДзоГл");
        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[0].class.name(), "Дз");
        assert_eq!(occurrences[1].start, "аДзо".len());

        assert_eq!(table.expand_inline("Дз,ж,Гл"), "б,д,ж,п,т");
        assert_eq!(table.expand_inline("без класів"), "без класів");
    }
}
