//! # Cyberbot Dialogue Engine Integration Tests
//!
//! File: cli/tests/engine.rs
//!
//! ## Overview
//!
//! Treats the dialogue engine as a black box through the library's public API.
//!

use cyberbot::engine::{
    classify_topic, detect_sentiment, ConversationState, DialogueEngine, RandomPicker,
    ResponseTable, Sentiment, Topic, TurnKind, HELP_REPLY,
};

#[test]
fn test_keywords_win_in_any_case_or_padding() {
    let cases = [
        ("password", Topic::Password),
        ("scam", Topic::Scam),
        ("phishing", Topic::Scam),
        ("privacy", Topic::Privacy),
    ];
    for (keyword, expected) in cases {
        for input in [
            keyword.to_string(),
            keyword.to_uppercase(),
            format!("   tell me about {}   ", keyword),
            format!("Is my {} OK?\n", keyword.to_uppercase()),
        ] {
            assert_eq!(classify_topic(&input, None), expected, "input {:?}", input);
            assert_eq!(
                classify_topic(&input, Some(Topic::Privacy)),
                expected,
                "input {:?}",
                input
            );
        }
    }
}

#[test]
fn test_password_beats_privacy() {
    assert_eq!(
        classify_topic("Privacy of my PASSWORD manager", None),
        Topic::Password
    );
}

#[test]
fn test_continuation_depends_on_history() {
    assert_eq!(classify_topic("tell me more", Some(Topic::Scam)), Topic::Scam);
    assert_eq!(classify_topic("tell me more", None), Topic::Default);
}

#[test]
fn test_default_never_overwrites_last_topic() {
    let mut engine = DialogueEngine::new(RandomPicker::seeded(3));
    let state = ConversationState::default().remember(Topic::Password);

    for _ in 0..10 {
        let (_, next) = engine.select_response(Topic::Default, Sentiment::Curious, state.clone());
        assert_eq!(next.last_topic, Some(Topic::Password));
    }
}

#[test]
fn test_replies_always_come_from_the_table() {
    let table = ResponseTable::new();
    let mut engine = DialogueEngine::new(RandomPicker::from_entropy());
    let mut seen = std::collections::HashSet::new();

    for _ in 0..200 {
        let turn = engine.respond("Tell me about phishing scams", ConversationState::default());
        assert!(table.variants(Topic::Scam).contains(&turn.text.as_str()));
        seen.insert(turn.text);
    }
    // 200 uniform draws over three variants miss one with negligible probability.
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_help_reply_is_state_independent() {
    let mut engine = DialogueEngine::new(RandomPicker::seeded(9));
    let states = [
        ConversationState::default(),
        ConversationState::new("Ada").with_favorite_topic("scam"),
        ConversationState::new("Ada").remember(Topic::Privacy),
    ];
    for state in states {
        let turn = engine.respond("what can i ask you about?", state.clone());
        assert_eq!(turn.text, HELP_REPLY);
        assert_eq!(turn.kind, TurnKind::Help);
        assert_eq!(turn.state, state);
    }
}

#[test]
fn test_sentiment_priority() {
    assert_eq!(detect_sentiment("Worried and annoyed"), Sentiment::Worried);
    assert_eq!(detect_sentiment("Wondering, frustrated"), Sentiment::Curious);
    assert_eq!(detect_sentiment("hello"), Sentiment::Neutral);
}
