//! # Cyberbot Interactive Shell
//!
//! File: cli/src/shell/mod.rs
//!
//! ## Overview
//!
//! The read-respond loop around the dialogue engine. The shell owns the
//! conversation state for the life of the session and threads it through each
//! engine call. All terminal output goes through a `Renderer`, all input comes
//! from a `BufRead`, and the welcome sound goes through an `AudioPlayer`, so a
//! whole session can be driven from a byte buffer in tests.
//!
//! ## Session flow
//!
//! 1. Show the logo (optional)
//! 2. Ask for the user's name (blank means the configured default)
//! 3. Play the welcome sound (optional, failures are reported and ignored)
//! 4. Greet the user and ask for a favorite topic
//! 5. Loop: prompt, read a line, answer it, until `exit` or end of input
//!
//! Blank or undecodable lines are re-prompted. Only input read errors and a
//! terminal that stops accepting output end the session early.
//!
use crate::common::audio::AudioPlayer;
use crate::common::ui::{Renderer, LOGO};
use crate::core::config::Config;
use crate::core::error::{BotError, Result};
use crate::engine::{ConversationState, DialogueEngine, IndexPicker};
use anyhow::Context;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

const SEPARATOR_WIDTH: usize = 50;
const EXIT_COMMAND: &str = "exit";

const NAME_PROMPT: &str = "Please enter your name:";
const INTRO: &str = "I'm here to help you learn about staying safe online.";
const FAVORITE_PROMPT: &str = "What’s your favorite cybersecurity topic? (e.g., password, scam, privacy)";
const QUESTION_PROMPT: &str = "What would you like to know? (Type 'exit' to quit)";
const INVALID_INPUT: &str = "Please enter a valid question or command.";
const RECOVERY: &str = "Something went wrong. Let’s try again!";

/// Session options derived from the effective configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub show_logo: bool,
    /// Sound to play after the greeting. `None` disables audio.
    pub welcome_sound: Option<PathBuf>,
    pub default_user_name: String,
}

impl SessionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            show_logo: config.display.show_logo,
            welcome_sound: config
                .audio
                .enabled
                .then(|| PathBuf::from(&config.audio.file)),
            default_user_name: config.session.default_user_name.clone(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// One line read from the user.
enum Line {
    Text(String),
    Invalid,
    Eof,
}

fn read_line<I: BufRead>(input: &mut I) -> Result<Line> {
    let mut buf = String::new();
    match input.read_line(&mut buf) {
        Ok(0) => Ok(Line::Eof),
        Ok(_) => Ok(Line::Text(buf)),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            warn!("Discarding undecodable input line: {}", e);
            Ok(Line::Invalid)
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to read user input")),
    }
}

fn separator<R: Renderer>(renderer: &mut R) -> io::Result<()> {
    renderer.line(&"-".repeat(SEPARATOR_WIDTH))
}

/// # Run Session (`run_session`)
///
/// Runs one complete conversation and returns the final state.
///
/// ## Returns
///
/// * `Ok(ConversationState)` once the user types `exit` or input runs out.
/// * `Err` if input cannot be read or the renderer stops accepting output.
pub fn run_session<P, R, A, I>(
    engine: &mut DialogueEngine<P>,
    renderer: &mut R,
    player: &A,
    input: &mut I,
    settings: &SessionSettings,
) -> Result<ConversationState>
where
    P: IndexPicker,
    R: Renderer,
    A: AudioPlayer + ?Sized,
    I: BufRead,
{
    info!("Starting session.");
    if settings.show_logo {
        renderer.say(LOGO).context("Failed to display logo")?;
    }

    let mut state = greet(engine, renderer, player, input, settings)?;

    loop {
        separator(renderer)?;
        renderer.say(QUESTION_PROMPT)?;

        let line = match read_line(input)? {
            Line::Text(line) => line,
            Line::Invalid => {
                renderer.say(INVALID_INPUT)?;
                continue;
            }
            Line::Eof => {
                info!("Input closed, ending session.");
                break;
            }
        };

        if line.trim().eq_ignore_ascii_case(EXIT_COMMAND) {
            renderer.say(&format!(
                "Goodbye, {}! Stay safe online.",
                state.user_name
            ))?;
            break;
        }

        let turn = match engine.try_respond(&line, state.clone()) {
            Ok(turn) => turn,
            Err(e) => {
                debug!("Re-prompting: {}", e);
                renderer.say(INVALID_INPUT)?;
                continue;
            }
        };
        state = turn.state;

        if let Err(e) = renderer.say(&turn.text) {
            error!("{}", BotError::from(e));
            renderer.line(RECOVERY)?;
        }
    }

    info!("Session ended.");
    Ok(state)
}

/// Asks for the user's name and favorite topic, playing the welcome sound in
/// between. Returns the initial conversation state.
fn greet<P, R, A, I>(
    engine: &DialogueEngine<P>,
    renderer: &mut R,
    player: &A,
    input: &mut I,
    settings: &SessionSettings,
) -> Result<ConversationState>
where
    P: IndexPicker,
    R: Renderer,
    A: AudioPlayer + ?Sized,
    I: BufRead,
{
    separator(renderer)?;
    renderer.say(NAME_PROMPT)?;
    let user_name = match read_line(input)? {
        Line::Text(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => settings.default_user_name.clone(),
    };
    debug!("User name: {}", user_name);

    if let Some(sound) = &settings.welcome_sound {
        if let Err(e) = player.play(sound) {
            warn!("Welcome sound unavailable: {:#}", e);
            renderer.line(&format!("Error: {}", e))?;
        }
    }

    renderer.say(&format!(
        "Hello, {}! Welcome to the Cybersecurity Awareness Bot!",
        user_name
    ))?;
    renderer.say(INTRO)?;
    renderer.say(FAVORITE_PROMPT)?;

    let favorite = match read_line(input)? {
        Line::Text(answer) => answer,
        Line::Invalid | Line::Eof => String::new(),
    };
    let state = ConversationState::new(&user_name).with_favorite_topic(&favorite);

    if engine.table().contains_key(&state.favorite_topic) {
        renderer.say(&format!(
            "Great choice, {}! I’ll keep that in mind. Let’s talk about {} or anything else!",
            state.user_name, state.favorite_topic
        ))?;
    }
    info!(
        "Greeted {} (favorite topic: {:?}).",
        state.user_name, state.favorite_topic
    );
    Ok(state)
}
