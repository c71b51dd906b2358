//! Smoke tests for the memcalc CLI
//!
//! These tests verify basic CLI functionality works correctly.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the memcalc binary
fn memcalc() -> Command {
    let mut cmd = Command::cargo_bin("memcalc").expect("memcalc binary should exist");
    cmd.env_remove("MEMCALC_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help_flag() {
    memcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("KEYS"))
        .stdout(predicate::str::contains("--steps"));
}

#[test]
fn test_version_flag() {
    memcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("memcalc"));
}

// ============================================================================
// Calculation Tests
// ============================================================================

#[test]
fn test_chained_calculation() {
    memcalc()
        .args(["2", "+", "3", "*", "4", "="])
        .assert()
        .success()
        .stdout("\n20\n");
}

#[test]
fn test_pending_operation_shown() {
    memcalc()
        .args(["1", "2", "3", "4", "÷"])
        .assert()
        .success()
        .stdout("1,234 ÷\n\n");
}

#[test]
fn test_hyphen_keys() {
    memcalc()
        .args(["-q", "9", "-", "3", "="])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_memory_line() {
    memcalc()
        .args(["5", "M+", "M+"])
        .assert()
        .success()
        .stdout(predicate::str::contains("M = 10"));
}

#[test]
fn test_verbose_prints_history_tape() {
    memcalc()
        .args(["-v", "6", "÷", "3", "=", "*", "5", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 ÷ 3 = 2\n2 * 5 = 10"));
}

#[test]
fn test_keys_from_stdin() {
    memcalc()
        .arg("-q")
        .write_stdin("8 / 2\nEnter\n")
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_binary_conversion() {
    memcalc()
        .args(["-q", "1", "0", "BIN"])
        .assert()
        .success()
        .stdout("1,010\n");
}

#[test]
fn test_steps_output() {
    memcalc()
        .args(["--steps", "7", "*", "6", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("   *  7 *"))
        .stdout(predicate::str::contains("   =  42"));
}

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output() {
    let output = memcalc()
        .args(["--json", "6", "÷", "3", "=", "M+"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["current"], "2");
    assert_eq!(value["previous"], "");
    assert_eq!(value["memory"], 2.0);
    assert_eq!(value["history"].as_array().unwrap().len(), 1);
    assert!(value.get("steps").is_none());
}

#[test]
fn test_json_steps() {
    let output = memcalc()
        .args(["--json", "--steps", "1", "BIN"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["steps"].as_array().unwrap().len(), 2);
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_unknown_key_rejected() {
    memcalc()
        .args(["1", "sqrt", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sqrt"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_config_file() {
    memcalc()
        .args(["--config", "/nonexistent/memcalc.yaml", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_yaml_config_limits_history() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memcalc.yaml");
    fs::write(&path, "history_capacity: 1\n").unwrap();

    let output = memcalc()
        .arg("--config")
        .arg(&path)
        .args(["--json", "1", "+", "1", "=", "+", "1", "="])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["history"].as_array().unwrap().len(), 1);
    assert_eq!(value["history"][0]["result"], 3.0);
}

#[test]
fn test_json_config_disables_history() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memcalc.json");
    fs::write(&path, r#"{"record_history": false}"#).unwrap();

    let output = memcalc()
        .arg("--config")
        .arg(&path)
        .args(["--json", "2", "*", "2", "="])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["history"].as_array().unwrap().is_empty());
}

#[test]
fn test_zero_capacity_config_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memcalc.yaml");
    fs::write(&path, "history_capacity: 0\n").unwrap();

    memcalc()
        .arg("--config")
        .arg(&path)
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("history_capacity"));
}
