//! # Cyberbot Dialogue Engine
//!
//! File: cli/src/engine/mod.rs
//!
//! ## Overview
//!
//! The engine turns one line of user input into one reply. It owns the
//! read-only response table and the reply picker; conversation state is passed
//! in with every call and the updated state comes back in the `Turn`.
//!
//! ## Architecture
//!
//! - `topic`: keyword classification into a `Topic`
//! - `sentiment`: keyword sentiment detection and reply wrapping
//! - `responses`: the canned reply variants and the help text
//! - `picker`: the `IndexPicker` seam used for variant selection
//! - `state`: `ConversationState`
//!
//! A turn runs in this order:
//! 1. Normalise the input (trim, lower-case)
//! 2. Answer the help phrase directly, leaving state untouched
//! 3. Detect sentiment and classify the topic
//! 4. Pick a variant, add the favorite-topic lead-in, wrap for sentiment
//! 5. Remember the topic unless it was the fallback
//!
//! ## Examples
//!
//! ```rust
//! use cyberbot::engine::{ConversationState, DialogueEngine, RandomPicker, Topic, TurnKind};
//!
//! let mut engine = DialogueEngine::new(RandomPicker::seeded(1));
//! let turn = engine.respond("Tell me about phishing scams", ConversationState::default());
//! assert!(matches!(turn.kind, TurnKind::Topic { topic: Topic::Scam, .. }));
//! assert_eq!(turn.state.last_topic, Some(Topic::Scam));
//! ```
//!
use crate::core::error::{BotError, Result};
use tracing::debug;

pub mod picker;
pub mod responses;
pub mod sentiment;
pub mod state;
pub mod topic;

pub use picker::{IndexPicker, RandomPicker};
pub use responses::{ResponseTable, HELP_REPLY};
pub use sentiment::{detect_sentiment, Sentiment};
pub use state::ConversationState;
pub use topic::{classify_topic, Topic};

/// The literal question that lists what the bot can do.
pub const HELP_PHRASE: &str = "what can i ask you about?";

/// What kind of reply a turn produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    /// The fixed capability summary.
    Help,
    /// A reply drawn from the response table.
    Topic { topic: Topic, sentiment: Sentiment },
}

/// The outcome of one call to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub text: String,
    pub kind: TurnKind,
    pub state: ConversationState,
}

/// Whether `input` is the help phrase, ignoring case and surrounding whitespace.
pub fn is_help_request(input: &str) -> bool {
    input.trim().to_lowercase() == HELP_PHRASE
}

/// Keyword-driven reply generator.
#[derive(Debug)]
pub struct DialogueEngine<P: IndexPicker> {
    table: ResponseTable,
    picker: P,
}

impl<P: IndexPicker> DialogueEngine<P> {
    pub fn new(picker: P) -> Self {
        Self {
            table: ResponseTable::new(),
            picker,
        }
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    /// # Respond (`respond`)
    ///
    /// Produces the reply to one line of input. Never fails; blank input
    /// simply falls through to the fallback topic. Use `try_respond` to have
    /// blank input rejected instead.
    pub fn respond(&mut self, input: &str, state: ConversationState) -> Turn {
        if is_help_request(input) {
            return Turn {
                text: HELP_REPLY.to_string(),
                kind: TurnKind::Help,
                state,
            };
        }

        let normalised = input.trim().to_lowercase();
        let sentiment = detect_sentiment(&normalised);
        let topic = classify_topic(&normalised, state.last_topic);
        let (text, state) = self.select_response(topic, sentiment, state);

        Turn {
            text,
            kind: TurnKind::Topic { topic, sentiment },
            state,
        }
    }

    /// Like `respond`, but blank or whitespace-only input is an error.
    pub fn try_respond(&mut self, input: &str, state: ConversationState) -> Result<Turn> {
        if input.trim().is_empty() {
            return Err(BotError::EmptyInput.into());
        }
        Ok(self.respond(input, state))
    }

    /// # Select Response (`select_response`)
    ///
    /// Picks one of `topic`'s variants, personalises it when `topic` is the
    /// user's favorite, wraps it for `sentiment`, and returns it together with
    /// the updated state. The fallback topic leaves `last_topic` as it was.
    pub fn select_response(
        &mut self,
        topic: Topic,
        sentiment: Sentiment,
        state: ConversationState,
    ) -> (String, ConversationState) {
        let variants = self.table.variants(topic);
        // Out-of-range picks wrap rather than panic.
        let index = self.picker.pick(variants.len()) % variants.len();
        debug!(
            "Selected variant {} of {} for topic '{}' ({})",
            index,
            variants.len(),
            topic,
            sentiment
        );

        let mut response = variants[index].to_string();
        if state.is_favorite(topic) {
            response = format!(
                "{}, since you’re interested in {}, here’s a tip: {}",
                state.user_name, state.favorite_topic, response
            );
        }

        (sentiment.wrap(&response), state.remember(topic))
    }
}
