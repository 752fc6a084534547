//! # Cyberbot Audio Utilities (`common::audio`)
//!
//! File: cli/src/common/audio.rs
//!
//! ## Overview
//!
//! Plays the welcome sound. Playback is handed to the platform's command-line
//! player, and the conversation does not wait for it. A background thread
//! waits on the player instead, so it does not linger as a zombie process:
//! - macOS: `afplay <file>`
//! - other Unix: `aplay -q <file>`
//! - Windows: PowerShell `Media.SoundPlayer`
//!
//! Every failure comes back as a `BotError` for the shell to report; none of
//! them are fatal.
//!
use crate::core::error::{BotError, Result};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

/// Something that can play a sound file.
pub trait AudioPlayer {
    fn play(&self, path: &Path) -> Result<()>;
}

/// Plays sounds through the operating system's command-line player.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPlayer;

impl AudioPlayer for SystemPlayer {
    fn play(&self, path: &Path) -> Result<()> {
        let full_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        debug!("Attempting to play: {}", full_path.display());

        if !path.is_file() {
            return Err(BotError::AudioMissing {
                path: path.display().to_string(),
            }
            .into());
        }

        let mut command = player_command(path);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        match command.spawn() {
            Ok(child) => {
                info!("Audio playback started (pid {}).", child.id());
                reap_in_background(child);
                Ok(())
            }
            Err(e) => Err(BotError::AudioPlayback(format!(
                "could not start '{}': {}",
                command.get_program().to_string_lossy(),
                e
            ))
            .into()),
        }
    }
}

/// Waits for `child` on a detached thread and logs how it exited.
fn reap_in_background(mut child: Child) -> JoinHandle<Option<ExitStatus>> {
    thread::spawn(move || match child.wait() {
        Ok(status) => {
            debug!("Audio player exited with {}.", status);
            Some(status)
        }
        Err(e) => {
            warn!("Failed to wait for audio player: {}", e);
            None
        }
    })
}

#[cfg(target_os = "macos")]
fn player_command(path: &Path) -> Command {
    let mut command = Command::new("afplay");
    command.arg(path);
    command
}

#[cfg(windows)]
fn player_command(path: &Path) -> Command {
    let quoted = path.display().to_string().replace('\'', "''");
    let mut command = Command::new("powershell");
    command.args([
        "-NoProfile",
        "-Command",
        &format!("(New-Object Media.SoundPlayer '{}').PlaySync()", quoted),
    ]);
    command
}

#[cfg(all(unix, not(target_os = "macos")))]
fn player_command(path: &Path) -> Command {
    let mut command = Command::new("aplay");
    command.arg("-q").arg(path);
    command
}
