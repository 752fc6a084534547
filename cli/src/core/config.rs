//! # Cyberbot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for Cyberbot, handling loading,
//! merging, validation, and access to configuration data. Every setting has a
//! built-in default, so the bot runs without any configuration file at all.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--delay-ms`, `--seed`, `--no-audio`, `--no-logo`)
//! 2. An explicit file passed with `--config <PATH>` (replaces 3 and 4)
//! 3. Project-specific `.cyberbot.toml` in current directory or ancestors
//! 4. User-specific `config.toml` in the platform config directory
//! 5. Default values defined in the code
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [display]
//! typing_delay_ms = 20
//! show_logo = false
//!
//! [audio]
//! enabled = true
//! file = "~/sounds/welcome.wav"
//!
//! [session]
//! default_user_name = "Friend"
//! seed = 7
//! ```
//!
//! Loading configuration:
//!
//! ```rust,ignore
//! let cfg = config::load_config(None, &ConfigOverrides::default())?;
//! let delay = cfg.display.typing_delay();
//! ```
//!
use crate::core::error::{BotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// Upper bound for the per-character typing delay. Anything slower makes the
/// bot unusable.
pub const MAX_TYPING_DELAY_MS: u64 = 1000;

const PROJECT_CONFIG_FILENAME: &str = ".cyberbot.toml";

/// The effective configuration after every source has been applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub display: DisplayConfig,
    pub audio: AudioConfig,
    pub session: SessionConfig,
}

/// How bot output is rendered in the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Delay between characters of bot speech, in milliseconds. `0` disables the animation.
    pub typing_delay_ms: u64,
    /// Whether the ASCII logo is shown at startup.
    pub show_logo: bool,
}

/// The welcome sound played after the user enters their name.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Path to the sound file (can use ~). Relative paths resolve against the working directory.
    pub file: String,
}

/// Conversation defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Name used when the user declines to give one.
    pub default_user_name: String,
    /// Fixed seed for reply selection. Unset means a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 50,
            show_logo: true,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: "welcome.wav".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_user_name: "User".to_string(),
            seed: None,
        }
    }
}

impl DisplayConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

/// # Configuration File Layer (`ConfigLayer`)
///
/// One configuration file as written. Every field is optional, so a key that
/// is present always overrides the layers below it, even when its value
/// happens to equal the built-in default.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    pub display: DisplayLayer,
    #[serde(default)]
    pub audio: AudioLayer,
    #[serde(default)]
    pub session: SessionLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayLayer {
    pub typing_delay_ms: Option<u64>,
    pub show_logo: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AudioLayer {
    pub enabled: Option<bool>,
    pub file: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SessionLayer {
    pub default_user_name: Option<String>,
    pub seed: Option<u64>,
}

impl Config {
    /// Overwrites every field `layer` sets.
    pub fn apply_layer(&mut self, layer: ConfigLayer) {
        if let Some(delay) = layer.display.typing_delay_ms {
            self.display.typing_delay_ms = delay;
        }
        if let Some(show_logo) = layer.display.show_logo {
            self.display.show_logo = show_logo;
        }
        if let Some(enabled) = layer.audio.enabled {
            self.audio.enabled = enabled;
        }
        if let Some(file) = layer.audio.file {
            self.audio.file = file;
        }
        if let Some(name) = layer.session.default_user_name {
            self.session.default_user_name = name;
        }
        if let Some(seed) = layer.session.seed {
            self.session.seed = Some(seed);
        }
    }

    /// Applies `layers` over the built-in defaults, lowest precedence first.
    pub fn from_layers<L>(layers: L) -> Self
    where
        L: IntoIterator<Item = ConfigLayer>,
    {
        let mut config = Config::default();
        for layer in layers {
            config.apply_layer(layer);
        }
        config
    }
}

/// Settings supplied on the command line. `None`/`false` means "not given".
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub typing_delay_ms: Option<u64>,
    pub seed: Option<u64>,
    pub no_audio: bool,
    pub no_logo: bool,
}

/// Loads, layers, expands, and validates the effective configuration.
///
/// When `explicit_path` is given, only that file is read (it must exist);
/// otherwise the project file is layered over the user file.
pub fn load_config(explicit_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let layers = match explicit_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            vec![load_layer_from_path(path)?]
        }
        None => {
            // User first so the project file overrides it.
            let user_layer = load_user_config()?;
            let project_layer = load_project_config()?;
            user_layer.into_iter().chain(project_layer).collect()
        }
    };
    let mut config = Config::from_layers(layers);
    apply_overrides(&mut config, overrides);
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Cyberbot", "cyberbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_layer_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_layer_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.cyberbot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.cyberbot.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_layer_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(delay) = overrides.typing_delay_ms {
        config.display.typing_delay_ms = delay;
    }
    if let Some(seed) = overrides.seed {
        config.session.seed = Some(seed);
    }
    if overrides.no_audio {
        config.audio.enabled = false;
    }
    if overrides.no_logo {
        config.display.show_logo = false;
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.audio.file = shellexpand::tilde(&config.audio.file).into_owned();
    debug!("Expanded audio file path: {}", config.audio.file);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.display.typing_delay_ms > MAX_TYPING_DELAY_MS {
        return Err(anyhow!(BotError::Config(format!(
            "typing_delay_ms = {} exceeds the maximum of {} ms.",
            config.display.typing_delay_ms, MAX_TYPING_DELAY_MS
        ))));
    }
    if config.audio.enabled && config.audio.file.trim().is_empty() {
        return Err(anyhow!(BotError::Config(
            "Audio is enabled but no audio file is configured.".to_string()
        )));
    }
    if config.session.default_user_name.trim().is_empty() {
        return Err(anyhow!(BotError::Config(
            "default_user_name cannot be blank.".to_string()
        )));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
