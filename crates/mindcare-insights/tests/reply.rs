use mindcare_core::models::sentiment::{SentimentLabel, SentimentResult};
use mindcare_insights::reply::compose_reply;
use mindcare_insights::sentiment::analyze_sentiment;

#[test]
fn strongly_negative_gets_coping_offer() {
    let reply = compose_reply(&analyze_sentiment("I feel sad and lonely"));
    assert!(reply.starts_with("I can see you're going through a difficult time."));
}

#[test]
fn mildly_negative_gets_challenges_reply() {
    let reply = compose_reply(&SentimentResult {
        score: -0.5,
        label: SentimentLabel::Negative,
    });
    assert!(reply.starts_with("Thank you for sharing that with me."));
}

#[test]
fn positive_and_neutral_replies() {
    let positive = compose_reply(&analyze_sentiment("I feel happy and grateful"));
    assert!(positive.starts_with("I'm glad to hear you're feeling positive!"));

    let neutral = compose_reply(&analyze_sentiment("I went to the store"));
    assert_eq!(
        neutral,
        "Thank you for sharing. Would you like to tell me more about what's on your mind today?"
    );
}
