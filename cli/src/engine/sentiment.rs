//! # Sentiment Detection
//!
//! File: cli/src/engine/sentiment.rs
//!
//! A coarse emotional tag read off a handful of keywords. It only changes how
//! a reply is phrased, never which reply is chosen.
//!
use std::fmt;

/// Coarse emotional tag detected from keywords in the user's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Worried,
    Curious,
    Frustrated,
    Neutral,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Worried => "worried",
            Sentiment::Curious => "curious",
            Sentiment::Frustrated => "frustrated",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Wraps `response` in the phrasing for this sentiment.
    pub fn wrap(self, response: &str) -> String {
        match self {
            Sentiment::Worried => format!(
                "I understand your concern. {} Let me share some tips to help you stay safe.",
                response
            ),
            Sentiment::Curious => format!("That’s a great question! {} Want to know more?", response),
            Sentiment::Frustrated => format!(
                "I’m sorry you’re feeling that way. {} Let’s work through this together.",
                response
            ),
            Sentiment::Neutral => response.to_string(),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword groups, checked in order. First match wins.
const CUES: [(Sentiment, &[&str]); 3] = [
    (Sentiment::Worried, &["worried", "scared"]),
    (Sentiment::Curious, &["curious", "wondering"]),
    (Sentiment::Frustrated, &["frustrated", "annoyed"]),
];

/// # Detect Sentiment (`detect_sentiment`)
///
/// Lower-cases `input` and returns the first sentiment whose keywords appear
/// in it, or `Sentiment::Neutral`.
pub fn detect_sentiment(input: &str) -> Sentiment {
    let input = input.to_lowercase();
    CUES.iter()
        .find(|(_, words)| words.iter().any(|word| input.contains(word)))
        .map(|(sentiment, _)| *sentiment)
        .unwrap_or(Sentiment::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_sentiment() {
        assert_eq!(detect_sentiment("I'm SCARED of hackers"), Sentiment::Worried);
        assert_eq!(detect_sentiment("just wondering"), Sentiment::Curious);
        assert_eq!(detect_sentiment("so annoyed right now"), Sentiment::Frustrated);
        assert_eq!(detect_sentiment("tell me about passwords"), Sentiment::Neutral);
    }

    #[test]
    fn worried_beats_curious() {
        assert_eq!(
            detect_sentiment("curious but also worried"),
            Sentiment::Worried
        );
    }

    #[test]
    fn wrapping() {
        assert_eq!(Sentiment::Neutral.wrap("Tip."), "Tip.");
        assert_eq!(
            Sentiment::Worried.wrap("Tip."),
            "I understand your concern. Tip. Let me share some tips to help you stay safe."
        );
        assert_eq!(
            Sentiment::Curious.wrap("Tip."),
            "That’s a great question! Tip. Want to know more?"
        );
        assert_eq!(
            Sentiment::Frustrated.wrap("Tip."),
            "I’m sorry you’re feeling that way. Tip. Let’s work through this together."
        );
    }
}
