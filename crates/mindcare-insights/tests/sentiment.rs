use mindcare_audit::sink::RecordingSink;
use mindcare_core::models::sentiment::SentimentLabel;
use mindcare_insights::sentiment::{analyze_message_sentiment, analyze_sentiment, score_text, tokenize};
use uuid::Uuid;

#[test]
fn grateful_text_is_positive() {
    let result = analyze_sentiment("I feel happy and grateful");
    assert_eq!(result.label, SentimentLabel::Positive);
    assert!(result.score >= 1.0);
    assert!(!score_text("I feel happy and grateful").escalated);
}

#[test]
fn hopeless_text_is_negative_and_escalates() {
    let scan = score_text("I feel hopeless and want to die");
    assert_eq!(scan.result.label, SentimentLabel::Negative);
    assert_eq!(scan.result.score, -2.0);
    assert!(scan.escalated);
    assert_eq!(scan.severe_terms, vec!["die"]);
}

#[test]
fn tokens_are_lowercase_words() {
    assert_eq!(
        tokenize("Feeling GOOD, not-sad... ok?"),
        vec!["feeling", "good", "not", "sad", "ok"]
    );
    assert!(tokenize("  ...  ").is_empty());
}

#[test]
fn words_inside_longer_words_do_not_count() {
    let scan = score_text("goodness sadly");
    assert_eq!(scan.result.score, 0.0);
    assert_eq!(scan.result.label, SentimentLabel::Neutral);
}

#[test]
fn label_thresholds() {
    // single positive word: 0.5 is not above 0.5
    assert_eq!(score_text("good").result.label, SentimentLabel::Neutral);
    assert_eq!(score_text("good great").result.label, SentimentLabel::Positive);
    // single negative word: -0.5 < -0.2
    assert_eq!(score_text("tired").result.label, SentimentLabel::Negative);
    // mixed cancels out
    assert_eq!(score_text("happy but sad").result.score, 0.0);
    assert_eq!(score_text("").result.label, SentimentLabel::Neutral);
}

#[test]
fn severe_words_carry_extra_penalty() {
    assert_eq!(score_text("kill").result.score, -1.5);
    assert_eq!(score_text("suicidal").result.score, -1.5);
}

#[test]
fn low_score_escalates_without_severe_words() {
    let scan = score_text("sad tired lonely exhausted");
    assert_eq!(scan.result.score, -2.0);
    assert!(scan.escalated);
    assert!(scan.severe_terms.is_empty());

    // exactly -1.5 from ordinary words is not below the threshold
    assert!(!score_text("sad tired lonely").escalated);
}

#[test]
fn escalation_is_reported_to_the_sink() {
    let sink = RecordingSink::new();
    let id = Uuid::new_v4();
    let result = analyze_message_sentiment(id, "Sometimes I think I want to die", &sink);
    assert_eq!(result.label, SentimentLabel::Negative);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message_id, Some(id));
    assert_eq!(events[0].score, result.score);
    assert_eq!(events[0].severe_terms, vec!["die"]);
}

#[test]
fn calm_text_is_not_reported() {
    let sink = RecordingSink::new();
    analyze_message_sentiment(Uuid::new_v4(), "Work was fine today", &sink);
    assert!(sink.is_empty());
}
