//! End-to-end tests for configured breakers

use std::io::Write;

use sklady_core::{
    BoundaryPolicy, BreakError, ClusterIndex, ConfigError, Error, LanguageConfig,
    SyllableBreaker,
};
use tempfile::NamedTempFile;

fn config() -> LanguageConfig {
    LanguageConfig::new("а,о", "б,к,р,н,п")
}

fn split(breaker: &SyllableBreaker, word: &str) -> String {
    breaker.syllabify(word).unwrap().to_string()
}

#[test]
fn test_basic_words() {
    let breaker = SyllableBreaker::from_config(&config()).unwrap();

    assert_eq!(split(&breaker, "бар"), "бар");
    assert_eq!(split(&breaker, "рак"), "рак");
    assert_eq!(split(&breaker, "барабан"), "ба-ра-бан");
    assert_eq!(split(&breaker, "банан"), "ба-нан");
    assert_eq!(split(&breaker, "кора"), "ко-ра");
    assert_eq!(split(&breaker, "о"), "о");
    assert_eq!(split(&breaker, ""), "");
}

#[test]
fn test_syllable_structure() {
    let breaker = SyllableBreaker::from_config(&config()).unwrap();
    let word = breaker.syllabify("банкар").unwrap();

    let first = &word.syllables()[0];
    assert_eq!(first.onset(), ["б"]);
    assert_eq!(first.nucleus(), Some("а"));
    assert_eq!(first.coda(), ["н"]);

    let second = word.next(0).unwrap();
    assert_eq!(second.onset(), ["к"]);
    assert_eq!(second.coda(), ["р"]);
    assert!(word.next(1).is_none());
}

#[test]
fn test_split_rules_take_precedence_over_policy() {
    let mut config = config();
    config.letter_classes = vec!["Son=р,н".to_string(), "Obs=б,к,п".to_string()];
    config.split_rules = vec!["|ObsSon".to_string(), "Son|Obs".to_string()];
    config.default_split = BoundaryPolicy::KeepCoda;
    let breaker = SyllableBreaker::from_config(&config).unwrap();

    assert_eq!(split(&breaker, "кобра"), "ко-бра");
    assert_eq!(split(&breaker, "банка"), "бан-ка");
    // no rule matches "р р", the whole run stays
    assert_eq!(split(&breaker, "барра"), "барр-а");
}

#[test]
fn test_prefix_segments() {
    let mut config = config();
    config.prefixes = Some("про, ,пере".to_string());
    let breaker = SyllableBreaker::from_config(&config).unwrap();

    let word = breaker.syllabify("пробор").unwrap();
    assert_eq!(word.to_string(), "про-бор");
    assert_eq!(word.segments().count(), 2);
}

#[test]
fn test_consonant_remainder_after_prefix() {
    let mut config = config();
    config.prefixes = Some("про".to_string());
    let breaker = SyllableBreaker::from_config(&config).unwrap();

    let word = breaker.syllabify("прок").unwrap();
    assert_eq!(word.to_string(), "про-к");

    let nuclei: Vec<Option<&str>> = word.iter().map(|s| s.nucleus()).collect();
    assert_eq!(nuclei, [Some("о"), None]);
    assert_eq!(word.syllables()[1].onset(), ["к"]);
}

#[test]
fn test_rewrite_rules_are_order_dependent() {
    let mut config = config();
    config.rewrite_rules = vec!["к/п".to_string(), "п/б".to_string()];
    let breaker = SyllableBreaker::from_config(&config).unwrap();
    assert_eq!(split(&breaker, "кора"), "бо-ра");

    config.rewrite_rules.reverse();
    let breaker = SyllableBreaker::from_config(&config).unwrap();
    assert_eq!(split(&breaker, "кора"), "по-ра");
}

#[test]
fn test_digit_is_unrecognizable() {
    let breaker = SyllableBreaker::from_config(&config()).unwrap();
    let err = breaker.syllabify("ба7").unwrap_err();
    assert_eq!(err.to_string(), "Unrecognizable letter 7 in word ба7");
}

#[test]
fn test_unknown_letter_fails_only_that_word() {
    let breaker = SyllableBreaker::from_config(&config()).unwrap();
    let mut index = ClusterIndex::new();

    let err = breaker.break_word("бард", &mut index).unwrap_err();
    assert_eq!(
        err,
        BreakError::UnrecognizableLetter {
            letter: "д".to_string(),
            word: "бард".to_string(),
        }
    );
    assert!(index.is_empty());

    assert_eq!(breaker.break_word("бар", &mut index).unwrap().to_string(), "бар");
    assert_eq!(index.len(), 2);
}

#[test]
fn test_cluster_registration_is_idempotent() {
    let breaker = SyllableBreaker::from_config(&config()).unwrap();
    let mut index = ClusterIndex::new();

    breaker.break_word("кобра", &mut index).unwrap();
    breaker.break_word("кобра", &mut index).unwrap();
    breaker.break_word("бор", &mut index).unwrap();

    let br = index.get("б р").unwrap();
    assert_eq!(br.word_count(), 1);
    assert_eq!(br.words()[0].to_string(), "коб-ра");

    let b = index.get("б").unwrap();
    assert_eq!(b.word_count(), 1);
    assert_eq!(b.words()[0].to_string(), "бор");
}

#[test]
fn test_parallel_batch_merges_like_sequential() {
    let breaker = SyllableBreaker::from_config(&config()).unwrap();
    let words = ["кобра", "банкар", "бард", "барабан", "кобра"];

    let mut sequential = ClusterIndex::new();
    for word in words {
        let _ = breaker.break_word(word, &mut sequential);
    }

    let mut parallel = ClusterIndex::new();
    for analysis in breaker.par_analyze_all(&words).into_iter().flatten() {
        parallel.record(&analysis);
    }

    let keys = |index: &ClusterIndex| -> Vec<(String, usize)> {
        index
            .iter()
            .map(|c| (c.key().to_string(), c.word_count()))
            .collect()
    };
    assert_eq!(keys(&parallel), keys(&sequential));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    write!(
        file,
        r#"
Name = "Test"
Vowels = "а,о"
Consonants = "Obs,р"
LetterClasses = ["Obs=б,к"]
SplitRules = ["|Obsр"]
DefaultSplit = "keep-coda"
"#
    )
    .unwrap();

    let breaker = SyllableBreaker::from_file(file.path()).unwrap();
    assert_eq!(breaker.name(), Some("Test"));
    assert_eq!(split(&breaker, "кобра"), "ко-бра");
    assert_eq!(split(&breaker, "корба"), "корб-а");
}

fn split_from_file(content: &str, word: &str) -> sklady_core::Result<String> {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    write!(file, "{}", content).unwrap();

    let breaker = SyllableBreaker::from_file(file.path())?;
    Ok(breaker.syllabify(word)?.to_string())
}

#[test]
fn test_umbrella_result_carries_both_error_kinds() {
    let valid = "Vowels = \"а,о\"\nConsonants = \"б,р\"\n";

    assert_eq!(split_from_file(valid, "бобра").unwrap(), "боб-ра");
    assert!(matches!(
        split_from_file(valid, "бокс"),
        Err(Error::Break(BreakError::UnrecognizableLetter { .. }))
    ));
    assert!(matches!(
        split_from_file("Consonants = \"б\"\n", "бо"),
        Err(Error::Config(ConfigError::MissingField("Vowels")))
    ));
}

#[test]
fn test_configuration_errors() {
    let mut missing = config();
    missing.vowels = None;
    assert_eq!(
        SyllableBreaker::from_config(&missing).unwrap_err(),
        ConfigError::MissingField("Vowels")
    );

    let mut bad_rule = config();
    bad_rule.rewrite_rules = vec!["а/о/б".to_string()];
    assert!(matches!(
        SyllableBreaker::from_config(&bad_rule),
        Err(ConfigError::MissingMarker(_))
    ));

    assert!(matches!(
        SyllableBreaker::from_code("xx"),
        Err(ConfigError::UnsupportedLanguage(_))
    ));
}
