//! CLI compare integration tests
//!
//! These tests drive the built `structcmp` binary against documents written
//! to a temporary directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_documents(temp_dir: &TempDir, expected: &str, actual: &str) -> (PathBuf, PathBuf) {
    let expected_path = temp_dir.path().join("expected.json");
    let actual_path = temp_dir.path().join("actual.json");
    fs::write(&expected_path, expected).unwrap();
    fs::write(&actual_path, actual).unwrap();
    (expected_path, actual_path)
}

fn run(args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_structcmp");
    Command::new(cli_bin)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_compare_equal_documents() {
    let temp_dir = TempDir::new().unwrap();
    let (expected, actual) = write_documents(
        &temp_dir,
        r#"{"name": "ada", "langs": ["rust", "c"]}"#,
        r#"{"langs": ["rust", "c"], "name": "ada"}"#,
    );

    let output = run(&[
        "compare",
        expected.to_str().unwrap(),
        actual.to_str().unwrap(),
    ]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "No difference");
}

#[test]
fn test_cli_compare_reports_difference() {
    let temp_dir = TempDir::new().unwrap();
    let (expected, actual) = write_documents(
        &temp_dir,
        r#"{"langs": ["rust", "c"]}"#,
        r#"{"langs": ["rust", "go"]}"#,
    );

    let output = run(&[
        "compare",
        expected.to_str().unwrap(),
        actual.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Difference at <root-object>.langs.[1]. Expected: c, but actual was: go"
    );
}

#[test]
fn test_cli_compare_renamed_key() {
    let temp_dir = TempDir::new().unwrap();
    let (expected, actual) = write_documents(&temp_dir, r#"{"id": 1}"#, r#"{"user_id": 1}"#);

    let output = run(&[
        "compare",
        expected.to_str().unwrap(),
        actual.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Difference at <root-object>. Actual object does not contain field: id"
    );
}

#[test]
fn test_cli_compare_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let (expected, actual) = write_documents(&temp_dir, "[1, 2, 3]", "[1, 2]");

    let output = run(&[
        "compare",
        expected.to_str().unwrap(),
        actual.to_str().unwrap(),
        "--format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["equal"], serde_json::json!(false));
    assert_eq!(
        report["difference"]["description"],
        "Difference at <root-object>. Expected collection is larger than actual collection"
    );
}

#[test]
fn test_cli_compare_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let (expected, _) = write_documents(&temp_dir, "{}", "{}");
    let missing = temp_dir.path().join("missing.json");

    let output = run(&[
        "compare",
        expected.to_str().unwrap(),
        missing.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read"), "Stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_compare_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let (expected, actual) = write_documents(&temp_dir, "{\"a\": ", "{}");

    let output = run(&[
        "compare",
        expected.to_str().unwrap(),
        actual.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid JSON in"));
}

#[test]
fn test_cli_compare_with_logging_keeps_stdout_clean() {
    let temp_dir = TempDir::new().unwrap();
    let (expected, actual) = write_documents(&temp_dir, "{\"a\": 1}", "{\"a\": 1}");

    let output = Command::new(env!("CARGO_BIN_EXE_structcmp"))
        .env_remove("RUST_LOG")
        .args([
            "compare",
            expected.to_str().unwrap(),
            actual.to_str().unwrap(),
            "--profile",
            "prod",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "No difference");
    assert!(String::from_utf8_lossy(&output.stderr).contains("\"op\":\"compare\""));
}
