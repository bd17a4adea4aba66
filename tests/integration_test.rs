//! Integration tests for StyleLens CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GRAMMAR: &str = r#"<rules>
  <rule id="THE_THE">
    <pattern lang="en">"the" "the"</pattern>
    <message>Double article.</message>
    <marker>1</marker>
    <error_rate>0</error_rate>
  </rule>
  <rule id="DAS_DAS">
    <pattern lang="de">"das" "das"</pattern>
    <message>Doppelter Artikel.</message>
    <marker>1</marker>
    <error_rate>3</error_rate>
  </rule>
</rules>"#;

// "I saw the the dog" followed by "Fine"
const TAGGED: &str = r#"[
  [["I", "i", "PRP"], [" ", null, null], ["saw", "see", "VBD"], [" ", null, null],
   ["the", "the", "DT"], [" ", null, null], ["the", "the", "DT"], [" ", null, null],
   ["dog", "dog", "NN"]],
  [["Fine", "fine", "JJ"]]
]"#;

const CLEAN: &str = r#"[[["Fine", "fine", "JJ"]]]"#;

#[allow(deprecated)]
fn get_cmd() -> Command {
    Command::cargo_bin("stylelens").unwrap()
}

fn setup_workspace(tagged: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("grammar.xml"), GRAMMAR).unwrap();
    fs::write(temp_dir.path().join("tagged.json"), tagged).unwrap();
    temp_dir
}

#[test]
fn test_check_reports_matches_as_xml() {
    let temp_dir = setup_workspace(TAGGED);

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "--rules", "grammar.xml", "--input", "tagged.json"])
        .assert()
        .code(2)
        .stdout("<error from=\"10\" to=\"13\">Double article.</error>\n");
}

#[test]
fn test_check_clean_text_exits_zero() {
    let temp_dir = setup_workspace(CLEAN);

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "--rules", "grammar.xml", "--input", "tagged.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_check_reads_stdin() {
    let temp_dir = setup_workspace(TAGGED);

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "--rules", "grammar.xml"])
        .write_stdin(TAGGED)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Double article."));
}

#[test]
fn test_check_with_directory_option() {
    let temp_dir = setup_workspace(TAGGED);

    get_cmd()
        .arg("-C")
        .arg(temp_dir.path())
        .args(["check", "--rules", "grammar.xml", "--input", "tagged.json"])
        .assert()
        .code(2);
}

#[test]
fn test_check_json_format() {
    let temp_dir = setup_workspace(TAGGED);

    let output = get_cmd()
        .current_dir(temp_dir.path())
        .args([
            "check",
            "--rules",
            "grammar.xml",
            "--input",
            "tagged.json",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["total"], 1);
    assert_eq!(json["matches"][0]["rule_id"], "THE_THE");
    assert_eq!(json["matches"][0]["word_index_from"], 5);
    assert_eq!(json["matches"][0]["word_index_to"], 8);
}

#[test]
fn test_check_terminal_format() {
    let temp_dir = setup_workspace(TAGGED);

    get_cmd()
        .current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .args([
            "check",
            "--rules",
            "grammar.xml",
            "--input",
            "tagged.json",
            "--format",
            "terminal",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[THE_THE] Double article."))
        .stdout(predicate::str::contains("Matches: 1"));
}

#[test]
fn test_check_max_sentence_length() {
    let temp_dir = setup_workspace(TAGGED);

    get_cmd()
        .current_dir(temp_dir.path())
        .args([
            "check",
            "--rules",
            "grammar.xml",
            "--input",
            "tagged.json",
            "--max-sentence-length",
            "3",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "<error from=\"10\" to=\"13\">This sentence is 5 words long",
        ));
}

#[test]
fn test_check_only_filters_rules() {
    let temp_dir = setup_workspace(TAGGED);

    get_cmd()
        .current_dir(temp_dir.path())
        .args([
            "check",
            "--rules",
            "grammar.xml",
            "--input",
            "tagged.json",
            "--only",
            "DAS_DAS",
        ])
        .assert()
        .success();
}

#[test]
fn test_check_language_filter() {
    let temp_dir = setup_workspace(TAGGED);

    get_cmd()
        .current_dir(temp_dir.path())
        .args([
            "check",
            "--rules",
            "grammar.xml",
            "--input",
            "tagged.json",
            "--language",
            "de",
        ])
        .assert()
        .success();
}

#[test]
fn test_check_writes_output_file() {
    let temp_dir = setup_workspace(TAGGED);

    get_cmd()
        .current_dir(temp_dir.path())
        .args([
            "check",
            "--rules",
            "grammar.xml",
            "--input",
            "tagged.json",
            "-o",
            "results.xml",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Results written to"));

    let content = fs::read_to_string(temp_dir.path().join("results.xml")).unwrap();
    assert!(content.starts_with("<error from=\"10\""));
}

#[test]
fn test_check_uses_config_file() {
    let temp_dir = setup_workspace(TAGGED);
    fs::write(
        temp_dir.path().join(".stylelens.toml"),
        "rules_file = \"grammar.xml\"\ndisabled_rules = [\"THE_THE\"]\n",
    )
    .unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "--input", "tagged.json"])
        .assert()
        .success();
}

#[test]
fn test_check_explicit_config_path() {
    let temp_dir = setup_workspace(TAGGED);
    fs::write(
        temp_dir.path().join("custom.toml"),
        "rules_file = \"grammar.xml\"\nmax_sentence_length = 2\n",
    )
    .unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["-c", "custom.toml", "check", "--input", "tagged.json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("This sentence is 5 words long"));
}

#[test]
fn test_check_without_rules_fails() {
    let temp_dir = setup_workspace(TAGGED);

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "--input", "tagged.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No rule file given"));
}

#[test]
fn test_check_missing_rule_file_fails() {
    let temp_dir = setup_workspace(TAGGED);

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "--rules", "missing.xml", "--input", "tagged.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing.xml"));
}

#[test]
fn test_check_invalid_rule_file_fails() {
    let temp_dir = setup_workspace(TAGGED);
    fs::write(
        temp_dir.path().join("grammar.xml"),
        r#"<rules><rule id="BROKEN"><pattern>"a"</pattern><message>m</message></rule></rules>"#,
    )
    .unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "--rules", "grammar.xml", "--input", "tagged.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("BROKEN"));
}

#[test]
fn test_check_malformed_input_fails() {
    let temp_dir = setup_workspace("{\"not\": \"sentences\"}");

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "--rules", "grammar.xml", "--input", "tagged.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Input error"));
}

#[test]
fn test_rules_lists_all_rules() {
    let temp_dir = setup_workspace(TAGGED);

    get_cmd()
        .current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .args(["rules", "--rules", "grammar.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SENTENCE_LENGTH"))
        .stdout(predicate::str::contains("THE_THE"))
        .stdout(predicate::str::contains("DAS_DAS"))
        .stdout(predicate::str::contains("3 rule(s)"));
}

#[test]
fn test_rules_json_language_filter() {
    let temp_dir = setup_workspace(TAGGED);

    let output = get_cmd()
        .current_dir(temp_dir.path())
        .args(["rules", "--rules", "grammar.xml", "--language", "de", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["SENTENCE_LENGTH", "DAS_DAS"]);
    assert_eq!(json[1]["false_positives"], 3.0);
}

#[test]
fn test_init_command_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".stylelens.toml");

    get_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "Configuration file should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(
        content.contains("max_sentence_length = 30"),
        "Config should contain the default limit"
    );
}

#[test]
fn test_init_command_refuses_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".stylelens.toml");
    fs::write(&config_path, "max_sentence_length = 12\n").unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("max_sentence_length = 30"));
}

#[test]
fn test_version_flag() {
    get_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stylelens"));
}

#[test]
fn test_generate_man_is_hidden() {
    get_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("generate-man").not());
}
