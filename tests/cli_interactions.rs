//! CLI options interaction tests
//!
//! These tests validate argument parsing and configuration errors. None of
//! them reach the probe loop, so no ping binary or network is needed.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a test command isolated from the caller's environment
fn create_test_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("latency-logger").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("LATENCY_HOST")
        .env_remove("LATENCY_INTERVAL")
        .env_remove("LATENCY_TIMEOUT")
        .env_remove("LATENCY_OUTPUT_DIR")
        .env_remove("LATENCY_LOG_FORMAT")
        .env_remove("ENABLE_COLOR")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_and_version() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--interval"))
        .stdout(predicate::str::contains("--count"))
        .stdout(predicate::str::contains("--duration"))
        .stdout(predicate::str::contains("--out"))
        .stdout(predicate::str::contains("Supported Environment Variables"))
        .stdout(predicate::str::contains("LATENCY_OUTPUT_DIR"));

    create_test_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_host_is_configuration_error() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .args(["--count", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("LATENCY_HOST"))
        .stderr(predicate::str::contains("Configuration help"));

    // Nothing is written before the configuration is valid
    assert!(!dir.path().join("data").exists());
}

#[test]
fn test_count_and_duration_conflict() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .args(["--host", "127.0.0.1", "--count", "3", "--duration", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_invalid_numeric_options() {
    let dir = TempDir::new().unwrap();

    let cases: &[&[&str]] = &[
        &["--host", "h", "--interval", "-1"],
        &["--host", "h", "--interval", "soon"],
        &["--host", "h", "--timeout", "0"],
        &["--host", "h", "--timeout", "301"],
        &["--host", "h", "--timeout", "1.5"],
        &["--host", "h", "--count", "0"],
        &["--host", "h", "--duration", "0"],
    ];

    for args in cases {
        create_test_cmd(&dir).args(*args).assert().failure();
    }
}

#[test]
fn test_invalid_host_rejected_before_probing() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .args(["--host=-c", "--count", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot start with '-'"));

    create_test_cmd(&dir)
        .args(["--host", "bad host", "--count", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("whitespace"));
}

#[test]
fn test_invalid_environment_value() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .env("LATENCY_TIMEOUT", "999")
        .args(["--host", "127.0.0.1", "--count", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("LATENCY_TIMEOUT"));
}

#[test]
fn test_invalid_dotenv_value() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "LATENCY_INTERVAL=never\n").unwrap();

    create_test_cmd(&dir)
        .args(["--host", "127.0.0.1", "--count", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("LATENCY_INTERVAL"));
}

#[test]
fn test_unwritable_output_path_fails_with_record_error() {
    let dir = TempDir::new().unwrap();
    // A regular file where a parent directory is expected
    fs::write(dir.path().join("blocker"), "x").unwrap();

    create_test_cmd(&dir)
        .args(["--host", "127.0.0.1", "--count", "1", "--out", "blocker/run.csv"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Sample log"));
}
