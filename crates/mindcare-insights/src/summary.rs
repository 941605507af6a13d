use mindcare_core::models::message::Message;

use crate::keywords::{KeywordGroup, user_text};
use crate::sentiment::score_text;

pub const EMPTY_SUMMARY: &str = "No user messages to summarize yet.";

const THEMES: &[KeywordGroup] = &[
    KeywordGroup {
        name: "anxiety",
        keywords: &["anxious", "anxiety", "worry", "worried", "stress", "stressed"],
    },
    KeywordGroup {
        name: "low mood",
        keywords: &["sad", "depress", "unhappy", "low", "down", "blue"],
    },
    KeywordGroup {
        name: "relationships",
        keywords: &["family", "parent", "child", "spouse", "partner", "relationship"],
    },
    KeywordGroup {
        name: "work-related stress",
        keywords: &["work", "job", "career", "coworker", "boss", "workplace"],
    },
    KeywordGroup {
        name: "sleep issues",
        keywords: &["sleep", "tired", "exhausted", "insomnia", "rest", "fatigue"],
    },
    KeywordGroup {
        name: "eating patterns",
        keywords: &["eat", "food", "weight", "diet", "appetite"],
    },
];

const TONE_THRESHOLD: f64 = 0.3;
const TREND_THRESHOLD: f64 = 0.3;
const MIN_TREND_MESSAGES: usize = 3;

/// Direction of sentiment between the first and second half of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Declining,
    Consistent,
}

/// Sentiment score of each user message, reusing attached sentiment.
pub fn sentiment_scores(messages: &[Message]) -> Vec<f64> {
    messages
        .iter()
        .filter(|m| m.is_from_user())
        .map(|m| match m.sentiment {
            Some(sentiment) => sentiment.score,
            None => score_text(&m.text).result.score,
        })
        .collect()
}

/// Theme names found in the user's text, in fixed order.
pub fn detect_themes(messages: &[Message]) -> Vec<&'static str> {
    let text = user_text(messages);
    THEMES
        .iter()
        .filter(|theme| theme.matches(&text))
        .map(|theme| theme.name)
        .collect()
}

/// `None` with fewer than three scores. The first half holds the first
/// `n / 2` scores and the second half the rest.
pub fn sentiment_trend(scores: &[f64]) -> Option<Trend> {
    if scores.len() < MIN_TREND_MESSAGES {
        return None;
    }
    let (first, second) = scores.split_at(scores.len() / 2);
    let (first_avg, second_avg) = (mean(first), mean(second));
    Some(if second_avg > first_avg + TREND_THRESHOLD {
        Trend::Improving
    } else if first_avg > second_avg + TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Consistent
    })
}

/// Templated paragraph describing tone, themes, and trend of the session.
pub fn generate_summary(messages: &[Message]) -> String {
    if !messages.iter().any(Message::is_from_user) {
        return EMPTY_SUMMARY.to_string();
    }

    let scores = sentiment_scores(messages);
    let average = mean(&scores);
    let themes = detect_themes(messages);

    let mut summary = String::from("Session Summary: This conversation ");

    if average > TONE_THRESHOLD {
        summary.push_str("had a generally positive tone. ");
    } else if average < -TONE_THRESHOLD {
        summary.push_str("expressed significant distress or negative emotions. ");
    } else {
        summary.push_str("contained mixed or neutral emotions. ");
    }

    if themes.is_empty() {
        summary.push_str("No specific themes were strongly identified. ");
    } else {
        summary.push_str(&format!(
            "The main themes discussed were: {}. ",
            themes.join(", ")
        ));
    }

    match sentiment_trend(&scores) {
        Some(Trend::Improving) => summary
            .push_str("The emotional tone appeared to improve as the conversation progressed."),
        Some(Trend::Declining) => {
            summary.push_str("The emotional tone seemed to decline during the conversation.")
        }
        Some(Trend::Consistent) => summary.push_str(
            "The emotional tone remained relatively consistent throughout the conversation.",
        ),
        None => {}
    }

    summary
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
