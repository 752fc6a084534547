//! # Cyberbot CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `cyberbot` binary: standard flags and
//! configuration errors that stop the program before a session starts.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    cyberbot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--delay-ms"))
        .stdout(predicate::str::contains("--no-audio"));
}

#[test]
fn test_version_flag() {
    cyberbot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_rejected() {
    cyberbot_cmd()
        .arg("--colour")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

/// A delay above the maximum is a startup error: non-zero exit, message on stderr,
/// nothing on stdout.
#[test]
fn test_invalid_config_fails_fast() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("bad.toml");
    fs::write(&config_path, "[display]\ntyping_delay_ms = 5000\n").unwrap();

    cyberbot_cmd()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config_path)
        .write_stdin("Ada\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("exceeds the maximum"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().unwrap();

    cyberbot_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read configuration file"));
}

#[test]
fn test_cli_delay_overrides_invalid_file_value() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("slow.toml");
    fs::write(&config_path, "[display]\ntyping_delay_ms = 5000\n").unwrap();

    cyberbot_cmd()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["--delay-ms", "0", "--no-logo", "--no-audio"])
        .write_stdin("Ada\n\nexit\n")
        .assert()
        .success();
}
