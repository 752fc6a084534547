//! # Topic Classification
//!
//! File: cli/src/engine/topic.rs
//!
//! ## Overview
//!
//! Maps a line of user input onto one of the fixed topics the bot can talk
//! about. Classification is a plain keyword scan in a fixed priority order;
//! the first rule that matches wins and there is no scoring.
//!
//! | Priority | Input contains                             | Topic                |
//! |----------|--------------------------------------------|----------------------|
//! | 1        | `password`                                 | `Password`           |
//! | 2        | `scam` or `phishing`                       | `Scam`               |
//! | 3        | `privacy`                                  | `Privacy`            |
//! | 4        | `more` / `tell me more` / `continue`       | the remembered topic |
//! | 5        | anything else                              | `Default`            |
//!
//! Rule 4 only applies when a previous turn left a topic behind.
//!
use crate::core::error::BotError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Words that ask the bot to keep going on the last topic.
const CONTINUATION_CUES: [&str; 3] = ["more", "tell me more", "continue"];

/// One of the fixed categories the bot can discuss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Password,
    Scam,
    Privacy,
    /// Fallback for input the bot does not understand.
    Default,
}

impl Topic {
    /// All topics, in table order.
    pub const ALL: [Topic; 4] = [Topic::Password, Topic::Scam, Topic::Privacy, Topic::Default];

    /// The lookup key used in favorite-topic matching and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Password => "password",
            Topic::Scam => "scam",
            Topic::Privacy => "privacy",
            Topic::Default => "default",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| BotError::UnknownTopic(s.to_string()))
    }
}

/// # Classify Topic (`classify_topic`)
///
/// Lower-cases and trims `input`, then applies the priority rules above.
/// `last_topic` is the topic remembered from earlier turns, if any.
///
/// The help phrase is not recognised here; callers deal with it before
/// classification.
pub fn classify_topic(input: &str, last_topic: Option<Topic>) -> Topic {
    let input = input.trim().to_lowercase();

    let topic = if input.contains("password") {
        Topic::Password
    } else if input.contains("scam") || input.contains("phishing") {
        Topic::Scam
    } else if input.contains("privacy") {
        Topic::Privacy
    } else {
        match last_topic {
            Some(last) if CONTINUATION_CUES.iter().any(|cue| input.contains(cue)) => last,
            _ => Topic::Default,
        }
    };

    debug!("Classified {:?} as topic '{}'", input, topic);
    topic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_regardless_of_case_and_whitespace() {
        assert_eq!(classify_topic("  How do I pick a PASSWORD?  ", None), Topic::Password);
        assert_eq!(classify_topic("Is this a Scam", None), Topic::Scam);
        assert_eq!(classify_topic("phishing emails", None), Topic::Scam);
        assert_eq!(classify_topic("\tPrivacy settings\n", None), Topic::Privacy);
    }

    #[test]
    fn first_rule_wins() {
        assert_eq!(
            classify_topic("password and privacy", None),
            Topic::Password
        );
        assert_eq!(
            classify_topic("privacy of a phishing site", None),
            Topic::Scam
        );
        // Keywords beat the continuation cue.
        assert_eq!(
            classify_topic("tell me more about privacy", Some(Topic::Scam)),
            Topic::Privacy
        );
    }

    #[test]
    fn continuation_reuses_last_topic() {
        assert_eq!(classify_topic("tell me more", Some(Topic::Scam)), Topic::Scam);
        assert_eq!(classify_topic("Continue", Some(Topic::Password)), Topic::Password);
        assert_eq!(classify_topic("more please", Some(Topic::Privacy)), Topic::Privacy);
    }

    #[test]
    fn continuation_without_history_is_default() {
        assert_eq!(classify_topic("tell me more", None), Topic::Default);
    }

    #[test]
    fn unknown_input_is_default() {
        assert_eq!(classify_topic("what's the weather?", Some(Topic::Scam)), Topic::Default);
        assert_eq!(classify_topic("", None), Topic::Default);
    }

    #[test]
    fn parses_topic_keys() {
        assert_eq!("scam".parse::<Topic>().unwrap(), Topic::Scam);
        assert_eq!("default".parse::<Topic>().unwrap(), Topic::Default);
        let err = "weather".parse::<Topic>().unwrap_err();
        assert!(matches!(err, BotError::UnknownTopic(ref s) if s == "weather"));
    }
}
