use mindcare_core::models::message::Message;
use mindcare_core::models::sentiment::{SentimentLabel, SentimentResult};
use mindcare_insights::summary::{
    EMPTY_SUMMARY, Trend, detect_themes, generate_summary, sentiment_scores, sentiment_trend,
};

fn scored(text: &str, score: f64) -> Message {
    Message::user(text).with_sentiment(SentimentResult {
        score,
        label: SentimentLabel::Neutral,
    })
}

#[test]
fn empty_history_has_nothing_to_summarize() {
    assert_eq!(generate_summary(&[]), "No user messages to summarize yet.");
    assert_eq!(generate_summary(&[Message::bot("Hello!")]), EMPTY_SUMMARY);
}

#[test]
fn short_positive_session_omits_the_trend() {
    let messages = vec![Message::user("I feel happy and grateful")];
    assert_eq!(
        generate_summary(&messages),
        "Session Summary: This conversation had a generally positive tone. \
         No specific themes were strongly identified. "
    );
}

#[test]
fn distressed_session_lists_themes_and_trend() {
    let messages = vec![
        Message::user("I am so worried about my job"),
        Message::bot("Tell me more."),
        Message::user("My boss keeps shouting and I feel hopeless"),
        Message::user("I am exhausted and sad"),
    ];
    assert_eq!(
        generate_summary(&messages),
        "Session Summary: This conversation expressed significant distress or negative emotions. \
         The main themes discussed were: anxiety, low mood, work-related stress, sleep issues. \
         The emotional tone remained relatively consistent throughout the conversation."
    );
}

#[test]
fn attached_sentiment_is_reused() {
    let messages = vec![
        scored("first", -1.0),
        scored("second", -1.0),
        scored("third", 1.0),
        scored("fourth", 1.0),
    ];
    assert_eq!(sentiment_scores(&messages), vec![-1.0, -1.0, 1.0, 1.0]);

    let summary = generate_summary(&messages);
    assert!(summary.contains("contained mixed or neutral emotions. "));
    assert!(summary.ends_with("The emotional tone appeared to improve as the conversation progressed."));
}

#[test]
fn summary_is_stable_across_calls() {
    let messages = vec![
        scored("I worry a lot", -0.5),
        scored("It is getting better", 0.5),
        scored("I slept well", 0.0),
    ];
    assert_eq!(generate_summary(&messages), generate_summary(&messages));
}

#[test]
fn trend_splits_at_floor_of_half() {
    // first half [0.0], second half [-1.0, -1.0]
    assert_eq!(sentiment_trend(&[0.0, -1.0, -1.0]), Some(Trend::Declining));
    // first half [1.0, -1.0] avg 0.0, second half [0.2, 0.2, 0.2] avg 0.2
    assert_eq!(sentiment_trend(&[1.0, -1.0, 0.2, 0.2, 0.2]), Some(Trend::Consistent));
    assert_eq!(sentiment_trend(&[-1.0, 0.5, 0.5]), Some(Trend::Improving));
    assert_eq!(sentiment_trend(&[-3.0, 3.0]), None);
}

#[test]
fn themes_match_substrings() {
    // "great" contains "eat", "slowly" contains "low"
    let messages = vec![Message::user("Things are great, moving slowly")];
    assert_eq!(detect_themes(&messages), vec!["low mood", "eating patterns"]);
}
