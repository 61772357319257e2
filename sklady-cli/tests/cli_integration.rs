//! Integration tests for the sklady CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn sklady() -> Command {
    let mut cmd = Command::cargo_bin("sklady").unwrap();
    cmd.env_remove("SKLADY_LANGUAGE_CONFIG");
    cmd
}

#[test]
fn test_split_ukrainian_text() {
    let mut cmd = sklady();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("ukrainian-sample.txt"))
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "барабан=ба-ра-бан\nі=і\nсестра=се-стра\nдобре=до-бре\nмісто=мі-сто\n",
        ))
        .stdout(predicate::str::contains("відро=ві-дро\n"))
        .stdout(predicate::str::contains("мама=ма-ма\n"))
        .stdout(predicate::str::contains(
            "hello=Error: Unrecognizable letter h in word hello",
        ));
}

#[test]
fn test_split_with_clusters() {
    let mut cmd = sklady();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("ukrainian-sample.txt"))
        .arg("--clusters")
        .arg("--parallel")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Clusters by word count\n"))
        .stdout(predicate::str::contains("Clusters by length\n"))
        .stdout(predicate::str::contains("с т р (1): се-стра"));
}

#[test]
fn test_min_cluster_size_filters_report() {
    let mut cmd = sklady();
    cmd.arg("split")
        .arg("--clusters")
        .arg("--min-cluster-size")
        .arg("3")
        .arg("-q")
        .write_stdin("сестра мама");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("с т р (1): се-стра"))
        .stdout(predicate::str::contains("м (1)").not());
}

#[test]
fn test_json_output() {
    let mut cmd = sklady();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("ukrainian-sample.txt"))
        .arg("-f")
        .arg("json")
        .arg("--clusters")
        .arg("-q");

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();

    let words = report["words"].as_array().unwrap();
    assert_eq!(words[0]["word"], "барабан");
    assert_eq!(words[0]["syllables"], serde_json::json!(["ба", "ра", "бан"]));
    assert_eq!(words[0]["structure"][2]["coda"], serde_json::json!(["н"]));

    let hello = words.iter().find(|w| w["word"] == "hello").unwrap();
    assert!(hello["error"].as_str().unwrap().contains("Unrecognizable"));

    assert!(report["clusters"]["by_word_count"].is_array());
    assert!(report["clusters"]["by_length"].is_array());
}

#[test]
fn test_markdown_output() {
    let mut cmd = sklady();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("ukrainian-sample.txt"))
        .arg("-f")
        .arg("markdown")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("| Word | Syllables |"))
        .stdout(predicate::str::contains("| сестра | се-стра |"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total words: 8, errors: 1*"));
}

#[test]
fn test_stdin_input() {
    let mut cmd = sklady();
    cmd.arg("split").arg("-q").write_stdin("Сонце, мавпа; п'ять!");

    cmd.assert()
        .success()
        .stdout("сонце=сон-це\nмавпа=мав-па\nп'ять=пйать\n");
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.txt");

    let mut cmd = sklady();
    cmd.arg("split")
        .arg("-o")
        .arg(&output_path)
        .arg("-q")
        .write_stdin("барабан");

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    assert_eq!(content, "барабан=ба-ра-бан\n");
}

#[test]
fn test_external_toml_config() {
    let mut cmd = sklady();
    cmd.arg("split")
        .arg("-c")
        .arg(fixture_path("test-language.toml"))
        .arg("-q")
        .write_stdin("tabla sunset aksa");

    cmd.assert()
        .success()
        .stdout("tabla=ta-bla\nsunset=sun-set\naksa=ak-sa\n");
}

#[test]
fn test_external_json_config() {
    let mut cmd = sklady();
    cmd.arg("split")
        .arg("--language-config")
        .arg(fixture_path("test-language.json"))
        .arg("-q")
        .write_stdin("tabla sunset aksa");

    cmd.assert()
        .success()
        .stdout("tabla=ta-bla\nsunset=sun-set\naksa=aks-a\n");
}

#[test]
fn test_language_config_from_env() {
    let mut cmd = sklady();
    cmd.env("SKLADY_LANGUAGE_CONFIG", fixture_path("test-language.toml"))
        .arg("split")
        .arg("-q")
        .write_stdin("tabla");

    cmd.assert().success().stdout("tabla=ta-bla\n");
}

#[test]
fn test_language_and_config_conflict() {
    let mut cmd = sklady();
    cmd.arg("split")
        .arg("-l")
        .arg("uk")
        .arg("-c")
        .arg(fixture_path("test-language.toml"));

    cmd.assert().failure();
}

#[test]
fn test_unsupported_language() {
    let mut cmd = sklady();
    cmd.arg("split").arg("-l").arg("xx").write_stdin("abc");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language"));
}

#[test]
fn test_nonexistent_file() {
    let mut cmd = sklady();
    cmd.arg("split").arg("-i").arg("nonexistent-file.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_glob_pattern() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "мама").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "сестра").unwrap();
    let pattern = temp_dir.path().join("*.txt");

    let mut cmd = sklady();
    cmd.arg("split").arg("-i").arg(pattern.to_str().unwrap()).arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("мама=ма-ма"))
        .stdout(predicate::str::contains("сестра=се-стра"));
}

#[test]
fn test_validate_valid_config() {
    let mut cmd = sklady();
    cmd.arg("validate")
        .arg("-c")
        .arg(fixture_path("test-language.toml"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration is valid!"))
        .stdout(predicate::str::contains("Language name: Test Latin"))
        .stdout(predicate::str::contains("Split rules: 2"));
}

#[test]
fn test_validate_invalid_config() {
    let mut cmd = sklady();
    cmd.arg("validate")
        .arg("-c")
        .arg(fixture_path("invalid-language.toml"));

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("✗ Configuration is invalid!"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_generate_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");

    let mut cmd = sklady();
    cmd.arg("generate-config")
        .arg("--name")
        .arg("Custom")
        .arg("-o")
        .arg(&config_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sklady validate"));

    let mut cmd = sklady();
    cmd.arg("validate").arg("-c").arg(&config_path);
    cmd.assert().success();

    let mut cmd = sklady();
    cmd.arg("split")
        .arg("-c")
        .arg(&config_path)
        .arg("-q")
        .write_stdin("tabla");
    cmd.assert().success().stdout("tabla=ta-bla\n");
}

#[test]
fn test_list_languages() {
    let mut cmd = sklady();
    cmd.arg("list").arg("languages");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Available languages:"))
        .stdout(predicate::str::contains("uk"));
}

#[test]
fn test_list_formats() {
    let mut cmd = sklady();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_help() {
    let mut cmd = sklady();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("split"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("generate-config"));
}
