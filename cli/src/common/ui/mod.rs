//! # Cyberbot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Everything that decides how text reaches the terminal. The shell talks to a
//! `Renderer` and never writes to stdout directly, so the dialogue logic can be
//! exercised without the typing animation or a real terminal.
//!
//! - **`typewriter`**: `Typewriter`, the `Renderer` used by the binary. Prints
//!   bot speech one character at a time with a configurable delay.
//! - **`logo`**: the ASCII banner shown at startup.
//!
//! ## Usage
//!
//! ```rust
//! use cyberbot::common::ui::{Renderer, Typewriter};
//! use std::time::Duration;
//!
//! let mut renderer = Typewriter::new(Vec::new(), Duration::ZERO);
//! renderer.say("Hello!").unwrap();
//! renderer.line("-----").unwrap();
//! assert_eq!(renderer.into_inner(), b"Hello!\n-----\n");
//! ```
//!
use std::io;

pub mod logo;
pub mod typewriter;

pub use logo::LOGO;
pub use typewriter::Typewriter;

/// Output strategy for the interactive shell.
pub trait Renderer {
    /// Writes a line of bot speech, animated if the renderer supports it.
    fn say(&mut self, text: &str) -> io::Result<()>;

    /// Writes a plain line at once (separators, diagnostics).
    fn line(&mut self, text: &str) -> io::Result<()>;
}
