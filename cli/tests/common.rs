//! # Cyberbot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`main_tests.rs`, `session.rs`).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate and pulls
//! this file in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// # Get Cyberbot Command (`cyberbot_cmd`)
///
/// An `assert_cmd::Command` pointing at the compiled `cyberbot` binary.
///
/// ## Panics
/// Panics if the `cyberbot` binary cannot be found via `Command::cargo_bin`.
pub fn cyberbot_cmd() -> Command {
    Command::cargo_bin("cyberbot").expect("Failed to find cyberbot binary for testing")
}

/// # Isolated Session (`session_cmd`)
///
/// A `cyberbot` command running inside `dir`, reading an empty configuration
/// file from that directory (so no user or project config leaks in), with the
/// typing animation and logo turned off and a fixed seed.
pub fn session_cmd(dir: &TempDir) -> Command {
    let config_path = dir.path().join("cyberbot.toml");
    fs::write(&config_path, "").expect("Failed to write test config");

    let mut cmd = cyberbot_cmd();
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["--delay-ms", "0", "--no-logo", "--seed", "5"]);
    cmd
}
