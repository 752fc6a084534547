//! # Cyberbot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Cyberbot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the effective configuration
//! - Running one interactive session over stdin/stdout
//!
//! Logs go to stderr so that stdout carries only the conversation.
//!
//! ## Examples
//!
//! ```bash
//! # Start a conversation
//! cyberbot
//!
//! # No animation, no sound, reproducible replies, debug logging
//! cyberbot --delay-ms 0 --no-audio --seed 7 -vv
//! ```
//!
use clap::Parser;
use cyberbot::common::audio::SystemPlayer;
use cyberbot::common::ui::Typewriter;
use cyberbot::core::config::{self, ConfigOverrides};
use cyberbot::engine::{DialogueEngine, RandomPicker};
use cyberbot::shell::{self, SessionSettings};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "cyberbot",
    about = "Cyberbot: a cybersecurity awareness chat in your terminal",
    long_about = "Ask about passwords, scams and phishing, or online privacy.\n\
                  Type 'what can I ask you about?' for help and 'exit' to quit.",
    version
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Read configuration from this file instead of the user/project config files.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Delay between typed characters in milliseconds (0 disables the animation).
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Seed for reply selection, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not play the welcome sound.
    #[arg(long)]
    no_audio: bool,

    /// Do not show the startup logo.
    #[arg(long)]
    no_logo: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Cyberbot failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = ConfigOverrides {
        typing_delay_ms: cli.delay_ms,
        seed: cli.seed,
        no_audio: cli.no_audio,
        no_logo: cli.no_logo,
    };
    let config = config::load_config(cli.config.as_deref(), &overrides)?;

    let mut engine = DialogueEngine::new(RandomPicker::new(config.session.seed));
    let mut renderer = Typewriter::new(io::stdout(), config.display.typing_delay());
    let settings = SessionSettings::from_config(&config);
    let mut input = io::stdin().lock();

    shell::run_session(&mut engine, &mut renderer, &SystemPlayer, &mut input, &settings)?;
    Ok(())
}
