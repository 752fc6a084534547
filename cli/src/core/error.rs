//! # Cyberbot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout Cyberbot. Almost every
//! failure in the bot is recoverable: a missing welcome sound or an unreadable
//! line is reported to the user and the conversation carries on. Only startup
//! failures (bad configuration, a closed terminal) end the process.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `BotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if !path.exists() {
//!     return Err(BotError::AudioMissing { path: path.display().to_string() }.into());
//! }
//!
//! // Recognise a recoverable error at the session boundary
//! match player.play(&path) {
//!     Ok(()) => {}
//!     Err(e) if e.downcast_ref::<BotError>().is_some() => renderer.line(&format!("Error: {}", e))?,
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Cyberbot application.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input cannot be empty.")]
    EmptyInput,

    #[error("Unknown topic '{0}'. Expected one of: password, scam, privacy, default.")]
    UnknownTopic(String),

    #[error("{path} not found in the application directory.")]
    AudioMissing { path: String },

    #[error("Audio playback failed: {0}")]
    AudioPlayback(String),

    #[error("Failed to render output: {source}")]
    Render {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
