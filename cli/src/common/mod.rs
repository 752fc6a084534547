//! # Cyberbot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared side-effect utilities used by the interactive shell. Keeping them
//! behind traits here separates terminal and audio concerns from the dialogue
//! engine (`engine::`) and from core infrastructure (`core::`).
//!
//! - **`audio`**: the `AudioPlayer` trait and `SystemPlayer`, which plays the welcome sound.
//! - **`ui`**: the `Renderer` trait, the `Typewriter` animation, and the startup logo.
//!

/// Welcome sound playback.
pub mod audio;
/// Terminal output: renderer strategy, typing animation, logo.
pub mod ui;
