//! Keyword sentiment tagging.
//!
//! Text is split into lowercase word tokens (runs of ASCII letters, digits
//! and `_`). Each positive word adds 0.5, each negative word subtracts 0.5,
//! and the self-harm indicators subtract a further 1.0. The label comes
//! from fixed thresholds on the final score.
//!
//! Every call also evaluates the escalation rule: a score below -1.5, or
//! any self-harm indicator, marks the text for human review.

use tracing::debug;
use uuid::Uuid;

use mindcare_audit::events::SevereContentEvent;
use mindcare_audit::sink::SafetySink;
use mindcare_core::models::sentiment::{SentimentLabel, SentimentResult};

pub const POSITIVE_WORDS: &[&str] = &[
    "happy", "glad", "joyful", "excellent", "amazing", "good", "great", "wonderful", "better",
    "positive", "optimistic", "hopeful", "pleased", "excited", "thankful", "grateful",
    "motivated", "peaceful", "relaxed",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "sad", "unhappy", "depressed", "anxious", "worried", "stressed", "angry", "upset",
    "frustrated", "afraid", "scared", "lonely", "exhausted", "tired", "hopeless", "worthless",
    "guilty", "irritated", "disappointed", "miserable", "hurt", "pain", "suffering",
    "overwhelmed", "suicidal", "kill", "die",
];

/// Negative words that carry an extra penalty and always escalate.
pub const SEVERE_WORDS: &[&str] = &["suicidal", "kill", "die"];

const WORD_WEIGHT: f64 = 0.5;
const SEVERE_PENALTY: f64 = 1.0;
const POSITIVE_THRESHOLD: f64 = 0.5;
const NEGATIVE_THRESHOLD: f64 = -0.2;
const ESCALATION_THRESHOLD: f64 = -1.5;

/// Result of scanning a text, including the escalation verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentScan {
    pub result: SentimentResult,
    pub escalated: bool,
    /// Severe words found, in order of appearance.
    pub severe_terms: Vec<String>,
}

/// Lowercase word tokens of `text`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Score `text` without side effects.
pub fn score_text(text: &str) -> SentimentScan {
    let mut score = 0.0;
    let mut severe_terms = Vec::new();

    for word in tokenize(text) {
        if POSITIVE_WORDS.contains(&word.as_str()) {
            score += WORD_WEIGHT;
        } else if NEGATIVE_WORDS.contains(&word.as_str()) {
            score -= WORD_WEIGHT;
            if SEVERE_WORDS.contains(&word.as_str()) {
                score -= SEVERE_PENALTY;
                severe_terms.push(word);
            }
        }
    }

    let label = if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    SentimentScan {
        result: SentimentResult { score, label },
        escalated: score < ESCALATION_THRESHOLD || !severe_terms.is_empty(),
        severe_terms,
    }
}

/// Tag free text. Escalations are logged through `tracing`.
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    let scan = score_text(text);
    if scan.escalated {
        SevereContentEvent::new(None, scan.result.score, scan.severe_terms).emit();
    }
    scan.result
}

/// Tag a chat message, reporting an escalation to `sink`.
pub fn analyze_message_sentiment(
    message_id: Uuid,
    text: &str,
    sink: &dyn SafetySink,
) -> SentimentResult {
    let scan = score_text(text);
    debug!(
        %message_id,
        score = scan.result.score,
        label = %scan.result.label,
        "sentiment tagged"
    );
    if scan.escalated {
        let event = SevereContentEvent::new(Some(message_id), scan.result.score, scan.severe_terms);
        sink.severe_content_detected(&event);
    }
    scan.result
}
