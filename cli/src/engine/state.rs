//! # Conversation State
//!
//! File: cli/src/engine/state.rs
//!
//! Everything the bot remembers between turns. The engine never holds on to
//! it: each turn takes the current state by value and hands back the updated
//! one.
//!
use crate::engine::topic::Topic;

pub const DEFAULT_USER_NAME: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    pub user_name: String,
    /// Lower-cased answer to the favorite-topic question. May be empty, and
    /// may not name a real topic.
    pub favorite_topic: String,
    /// Last keyword-classified topic. Never `Topic::Default`.
    pub last_topic: Option<Topic>,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new(DEFAULT_USER_NAME)
    }
}

impl ConversationState {
    pub fn new(user_name: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
            favorite_topic: String::new(),
            last_topic: None,
        }
    }

    /// Stores the user's favorite topic, normalised the way input is compared.
    pub fn with_favorite_topic(mut self, favorite: &str) -> Self {
        self.favorite_topic = favorite.trim().to_lowercase();
        self
    }

    /// Records `topic` as the one to continue with. The fallback topic is
    /// never remembered.
    pub fn remember(mut self, topic: Topic) -> Self {
        if topic != Topic::Default {
            self.last_topic = Some(topic);
        }
        self
    }

    pub fn is_favorite(&self, topic: Topic) -> bool {
        !self.favorite_topic.is_empty() && self.favorite_topic == topic.as_str()
    }
}
