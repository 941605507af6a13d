use mindcare_core::models::sentiment::{SentimentLabel, SentimentResult};

const DISTRESS_THRESHOLD: f64 = -0.5;

/// Scripted bot reply for a tagged user message.
pub fn compose_reply(sentiment: &SentimentResult) -> &'static str {
    match sentiment.label {
        SentimentLabel::Negative if sentiment.score < DISTRESS_THRESHOLD => {
            "I can see you're going through a difficult time. Remember that it's okay to feel this way, and sharing your feelings is an important step. Would you like to explore some coping strategies that might help?"
        }
        SentimentLabel::Negative => {
            "Thank you for sharing that with me. It sounds like you're facing some challenges. Would you like to talk more about what's troubling you, or would you prefer some suggestions for managing these feelings?"
        }
        SentimentLabel::Positive => {
            "I'm glad to hear you're feeling positive! It's great to acknowledge and celebrate these moments. Is there anything specific that contributed to this feeling that you'd like to discuss?"
        }
        SentimentLabel::Neutral => {
            "Thank you for sharing. Would you like to tell me more about what's on your mind today?"
        }
    }
}
