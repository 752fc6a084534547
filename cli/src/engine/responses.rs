//! # Response Table
//!
//! File: cli/src/engine/responses.rs
//!
//! The canned messages the bot draws from. Every topic, including the
//! `Default` fallback, has exactly `VARIANTS_PER_TOPIC` variants. The table is
//! an exhaustive `match` over `Topic`, so a lookup can never miss.
//!
use crate::engine::topic::Topic;

pub const VARIANTS_PER_TOPIC: usize = 3;

/// Reply to "what can i ask you about?".
pub const HELP_REPLY: &str = "You can ask about password security, scams, privacy, or just chat!";

const PASSWORD: [&str; VARIANTS_PER_TOPIC] = [
    "Make sure to use strong, unique passwords for each account. Avoid using personal details in your passwords.",
    "A strong password should be over 12 characters long, with letters, numbers, and special characters. Never reuse passwords!",
    "Consider using a password manager to generate and store complex passwords securely.",
];

const SCAM: [&str; VARIANTS_PER_TOPIC] = [
    "Be cautious of emails asking for personal information. Scammers often disguise themselves as trusted organizations.",
    "Scammers can be very convincing. Always verify the sender’s email and avoid clicking on suspicious links.",
    "If something seems too good to be true, it might be a scam. Double-check before sharing any sensitive details.",
];

const PRIVACY: [&str; VARIANTS_PER_TOPIC] = [
    "It’s crucial to stay safe online! Use strong privacy settings and be mindful of what you share.",
    "Protect your privacy by using two-factor authentication and reviewing your account security settings.",
    "Privacy is key! Avoid sharing personal details on public platforms and use secure connections.",
];

const FALLBACK: [&str; VARIANTS_PER_TOPIC] = [
    "I’m not sure I understand. Can you try rephrasing?",
    "I didn’t catch that. Could you explain it another way?",
    "Hmm, I’m not sure about that. Can you ask differently?",
];

/// Read-only mapping from each topic to its message variants.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseTable;

impl ResponseTable {
    pub fn new() -> Self {
        Self
    }

    /// The ordered variants for `topic`.
    pub fn variants(&self, topic: Topic) -> &'static [&'static str] {
        match topic {
            Topic::Password => &PASSWORD,
            Topic::Scam => &SCAM,
            Topic::Privacy => &PRIVACY,
            Topic::Default => &FALLBACK,
        }
    }

    /// Whether `key` names a topic in the table (used to acknowledge a favorite topic).
    pub fn contains_key(&self, key: &str) -> bool {
        key.parse::<Topic>().is_ok()
    }
}
