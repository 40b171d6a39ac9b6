//! Integration tests for the jsonlint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CLEAN_JSON: &str = "{\n    \"name\": \"demo\",\n    \"port\": 8080\n}\n";
const MISSING_COMMA_JSON: &str = "{\n    \"name\": \"demo\"\n    \"port\": 8080\n}\n";
const TRAILING_WS_JSON: &str = "{\n    \"name\": \"demo\" \n}\n";

fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn jsonlint() -> Command {
    Command::new(cargo_bin("jsonlint"))
}

#[test]
fn cli_shows_help() {
    jsonlint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Line-oriented JSON linter"));
}

#[test]
fn cli_shows_version() {
    jsonlint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_no_input_exits_two() {
    jsonlint()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File list is empty"));
}

#[test]
fn clean_file_reports_no_results() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "clean.json", CLEAN_JSON);

    jsonlint()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Linting: "))
        .stdout(predicate::str::contains("No results"));
}

#[test]
fn missing_comma_fails_with_line_precise_message() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "bad.json", MISSING_COMMA_JSON);

    jsonlint()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "line: 2 - Invalid syntax: missing comma.",
        ));
}

#[test]
fn missing_file_is_reported_and_batch_continues() {
    let temp = TempDir::new().unwrap();
    let good = write_file(&temp, "good.json", CLEAN_JSON);

    jsonlint()
        .args(["definitely-not-here.json", good.as_str()])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "File \"definitely-not-here.json\" does not exist.",
        ))
        .stdout(predicate::str::contains("good.json"));
}

#[test]
fn directory_arguments_expand_to_their_files() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "a.json", CLEAN_JSON);
    write_file(&temp, "b.json", CLEAN_JSON);

    jsonlint()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.json"))
        .stdout(predicate::str::contains("b.json"));
}

#[test]
fn quiet_mode_suppresses_reports_but_keeps_exit_code() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "bad.json", MISSING_COMMA_JSON);

    jsonlint()
        .args(["--quiet", path.as_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn strict_mode_promotes_warnings_to_failure() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "warn.json", TRAILING_WS_JSON);

    jsonlint().arg(&path).assert().success();
    jsonlint().args(["--strict", path.as_str()]).assert().code(1);
}

#[test]
fn indent_width_is_configurable() {
    let temp = TempDir::new().unwrap();
    let two_space = "{\n  \"name\": \"demo\"\n}\n";
    let path = write_file(&temp, "two.json", two_space);

    jsonlint()
        .arg(&path)
        .assert()
        .stdout(predicate::str::contains(
            "Indentation uses the wrong number of spaces, it should be 4",
        ));

    jsonlint()
        .args(["-i", "true,2", path.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results"));
}

#[test]
fn comma_allowance_silences_dangling_comma() {
    let temp = TempDir::new().unwrap();
    let dangling = "{\n    \"name\": \"demo\",\n}\n";
    let path = write_file(&temp, "dangle.json", dangling);

    jsonlint()
        .arg(&path)
        .assert()
        .stdout(predicate::str::contains("Dangling comma is not allowed."));

    jsonlint()
        .args(["--comma", "true", path.as_str()])
        .assert()
        .stdout(predicate::str::contains("Dangling comma is not allowed.").not());
}

#[test]
fn severity_flag_prefixes_diagnostics() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "warn.json", TRAILING_WS_JSON);

    jsonlint()
        .args(["--severity", path.as_str()])
        .assert()
        .stdout(predicate::str::contains("warning: Lines may not have"));
}

#[test]
fn json_format_is_machine_readable() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "bad.json", MISSING_COMMA_JSON);

    let output = jsonlint()
        .args(["--format", "json", path.as_str()])
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["summary"]["errors"].as_u64().unwrap(), 1);
    assert_eq!(parsed["files"][0]["diagnostics"][0]["line"], 2);
}

#[test]
fn bad_rule_value_fails_closed_and_still_lints() {
    let temp = TempDir::new().unwrap();
    let two_space = "{\n  \"name\": \"demo\"\n}\n";
    let path = write_file(&temp, "two.json", two_space);

    // The bad indent value disables only that rule; the run proceeds clean.
    jsonlint()
        .args(["--indent", "banana", path.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results"));
}
