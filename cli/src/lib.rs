//! # Cyberbot Library
//!
//! File: cli/src/lib.rs
//!
//! The library half of the `cyberbot` crate. The binary in `main.rs` is a thin
//! wrapper that parses flags, loads configuration, and hands stdin/stdout to
//! `shell::run_session`; integration tests use the same modules.
//!
//! - `core`: configuration and error types
//! - `engine`: the dialogue engine (classification, sentiment, reply selection)
//! - `common`: terminal rendering and audio playback
//! - `shell`: the interactive session loop
//!
pub mod common;
pub mod core;
pub mod engine;
pub mod shell;
