use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::emotion::EmotionResult;
use super::sentiment::SentimentResult;

/// A single chat message. Lives only as long as the session holding it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: jiff::Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionResult>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: jiff::Timestamp::now(),
            sentiment: None,
            emotion: None,
        }
    }

    pub fn with_sentiment(mut self, sentiment: SentimentResult) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sender {
    User,
    Bot,
}
