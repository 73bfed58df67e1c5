//! Smoke tests for the desk-calc binary
//!
//! These tests run the built binary in batch mode and check what it prints.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the desk-calc binary
fn desk_calc() -> Command {
    let mut cmd = Command::cargo_bin("desk-calc").expect("desk-calc binary should exist");
    cmd.env_remove("RUST_LOG").env_remove("DESK_CALC_LOG_FILE");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    desk_calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    desk_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--eval"))
        .stdout(predicate::str::contains("--steps"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_json_requires_eval() {
    desk_calc().arg("--json").assert().failure();
}

// ============================================================================
// Batch Mode Tests
// ============================================================================

#[test]
fn test_eval_addition() {
    desk_calc()
        .args(["--eval", "5 + 3 ="])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_eval_left_to_right() {
    desk_calc()
        .args(["-e", "2 * 3 + 4 ="])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_eval_division_by_zero_shows_error() {
    desk_calc()
        .args(["--eval", "1 / 0 ="])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_eval_leading_subtract() {
    desk_calc()
        .args(["--eval", "- 3 ="])
        .assert()
        .success()
        .stdout("-3\n");
}

#[test]
fn test_eval_steps() {
    desk_calc()
        .args(["--eval", "7 ± ±", "--steps"])
        .assert()
        .success()
        .stdout("7 -> 7\n± -> -7\n± -> 7\n");
}

#[test]
fn test_eval_json() {
    let output = desk_calc()
        .args(["--eval", "2 / 3 =", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let steps = value["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[3]["token"], "=");
    assert_eq!(steps[3]["display"], "0.666666666667");
}

#[test]
fn test_eval_unknown_token_fails() {
    desk_calc()
        .args(["--eval", "1 + x ="])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown token"));
}

// ============================================================================
// Logging Tests
// ============================================================================

#[test]
fn test_verbose_logs_to_file() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("desk-calc.log");

    desk_calc()
        .args(["-v", "--eval", "5 + 3 ="])
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success()
        .stdout("8\n");

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("key handled"));
}

#[test]
fn test_log_file_from_env() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("env.log");

    desk_calc()
        .env("DESK_CALC_LOG_FILE", &log)
        .args(["--eval", "1 / 0 ="])
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("calculation failed"));
}

#[test]
fn test_quiet_keeps_stderr_clean() {
    desk_calc()
        .args(["-q", "--eval", "1 / 0 ="])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
