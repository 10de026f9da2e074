//! CLI binary integration tests using assert_cmd + predicates.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin("json2schema").expect("binary should exist")
}

// ── Infer from a single example, to stdout ──────────────────────────────────

#[test]
fn test_infer_single_example_to_stdout() {
    let dir = TempDir::new().unwrap();
    let example = dir.path().join("example.json");
    fs::write(&example, r#"{"name": "Ada", "age": 36}"#).unwrap();

    cmd()
        .args(["infer", "--example", example.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"object\""))
        .stdout(predicate::str::contains("\"name\""));
}

// ── Infer to a file ──────────────────────────────────────────────────────────

#[test]
fn test_infer_to_file() {
    let dir = TempDir::new().unwrap();
    let example = dir.path().join("example.json");
    let output = dir.path().join("out.json");
    fs::write(&example, r#""alice@example.com""#).unwrap();

    cmd()
        .args(["infer", "--example", example.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&output).expect("output file should exist");
    let schema: serde_json::Value =
        serde_json::from_str(&content).expect("output should be valid JSON");
    assert_eq!(schema["type"], "string");
    assert_eq!(schema["format"], "email");
}

// ── Fusing an example with a schema fragment ────────────────────────────────

#[test]
fn test_infer_fuses_example_and_schema_fragment() {
    let dir = TempDir::new().unwrap();
    let example = dir.path().join("example.json");
    let schema = dir.path().join("fragment.json");
    fs::write(&example, r#"{"name": "Ada"}"#).unwrap();
    fs::write(&schema, r#"{"type": "object", "required": ["name"]}"#).unwrap();

    cmd()
        .args(["infer"])
        .args(["--example", example.to_str().unwrap()])
        .args(["--schema", schema.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"required\""));
}

// ── Directory loading ────────────────────────────────────────────────────────

#[test]
fn test_infer_from_examples_dir() {
    let dir = TempDir::new().unwrap();
    let examples_dir = dir.path().join("examples");
    fs::create_dir_all(&examples_dir).unwrap();
    fs::write(examples_dir.join("a.json"), r#"{"id": 1}"#).unwrap();
    fs::write(examples_dir.join("b.json"), r#"{"id": 2}"#).unwrap();

    cmd()
        .args(["infer", "--examples-dir", examples_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\""));
}

// ── Union keyword flag ───────────────────────────────────────────────────────

#[test]
fn test_infer_honors_union_keyword_flag() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    fs::write(&a, r#""alice""#).unwrap();
    fs::write(&b, "5").unwrap();

    cmd()
        .args(["infer"])
        .args(["--example", a.to_str().unwrap()])
        .args(["--example", b.to_str().unwrap()])
        .args(["--union-keyword", "one-of"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"oneOf\""));
}

// ── Pseudo-array flag ─────────────────────────────────────────────────────────

#[test]
fn test_infer_pseudo_arrays_flag_enables_detection() {
    let dir = TempDir::new().unwrap();
    let example = dir.path().join("example.json");
    fs::write(&example, r#"{"0": "red", "1": "green"}"#).unwrap();

    // Without the flag, numeric keys stay a plain object.
    cmd()
        .args(["infer", "--example", example.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"object\""));

    // With the flag, it's modelled as an array.
    cmd()
        .args(["infer", "--example", example.to_str().unwrap()])
        .arg("--pseudo-arrays")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"patternProperties\""));
}

// ── Custom $schema URI ───────────────────────────────────────────────────────

#[test]
fn test_infer_honors_schema_version_flag() {
    let dir = TempDir::new().unwrap();
    let example = dir.path().join("example.json");
    fs::write(&example, "1").unwrap();

    cmd()
        .args(["infer", "--example", example.to_str().unwrap()])
        .args(["--schema-version", "https://example.com/schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/schema"));
}

// ── Invalid input ─────────────────────────────────────────────────────────────

#[test]
fn test_infer_missing_file() {
    cmd()
        .args(["infer", "--example", "/nonexistent/path/example.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_infer_malformed_json() {
    let dir = TempDir::new().unwrap();
    let example = dir.path().join("bad.json");
    fs::write(&example, "not json").unwrap();

    cmd()
        .args(["infer", "--example", example.to_str().unwrap()])
        .assert()
        .failure();
}

// ── Help output ───────────────────────────────────────────────────────────────

#[test]
fn test_help_output() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("infer"));
}

#[test]
fn test_infer_help() {
    cmd()
        .args(["infer", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--union-keyword"))
        .stdout(predicate::str::contains("--pseudo-arrays"))
        .stdout(predicate::str::contains("--schema-version"));
}
