//! In-memory chat session.
//!
//! Holds the ordered message list for one conversation. Nothing here is
//! persisted; dropping the session discards the history.

use tracing::info;
use uuid::Uuid;

use mindcare_audit::sink::{SafetySink, TracingSink};
use mindcare_core::models::emotion::EmotionResult;
use mindcare_core::models::message::Message;
use mindcare_core::models::recommendation::Recommendation;

use crate::recommendations::personalized_recommendations;
use crate::reply::compose_reply;
use crate::sentiment::analyze_message_sentiment;
use crate::summary::generate_summary;

/// Insights refresh automatically once the history holds more than this
/// many messages before an exchange.
const INSIGHT_REFRESH_AFTER: usize = 4;

pub struct ChatSession<S: SafetySink = TracingSink> {
    messages: Vec<Message>,
    sink: S,
    summary: Option<String>,
    recommendations: Vec<Recommendation>,
}

/// The pair of messages produced by one call to [`ChatSession::send`].
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user: Message,
    pub reply: Message,
}

impl ChatSession<TracingSink> {
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for ChatSession<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SafetySink> ChatSession<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            messages: Vec::new(),
            sink,
            summary: None,
            recommendations: Vec::new(),
        }
    }

    /// Tag and record a user message, then record the scripted reply.
    ///
    /// Returns `None` for blank input, which leaves the session untouched.
    pub fn send(&mut self, text: &str) -> Option<Exchange> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let history_before = self.messages.len();

        let mut user = Message::user(text);
        let sentiment = analyze_message_sentiment(user.id, &user.text, &self.sink);
        user.sentiment = Some(sentiment);
        let reply = Message::bot(compose_reply(&sentiment));

        self.messages.push(user.clone());
        self.messages.push(reply.clone());

        if history_before > INSIGHT_REFRESH_AFTER {
            self.refresh_insights();
        }
        Some(Exchange { user, reply })
    }

    /// Recompute the summary and recommendations from the full history.
    pub fn refresh_insights(&mut self) {
        let summary = generate_summary(&self.messages);
        self.recommendations = personalized_recommendations(&self.messages);
        info!(
            messages = self.messages.len(),
            recommendations = self.recommendations.len(),
            "session insights refreshed"
        );
        self.summary = Some(summary);
    }

    /// Attach a voice-derived emotion estimate to a message.
    ///
    /// Returns `false` when no message has that id.
    pub fn attach_emotion(&mut self, message_id: Uuid, emotion: EmotionResult) -> bool {
        match self.messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                message.emotion = Some(emotion);
                true
            }
            None => false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Latest summary, if insights have been refreshed.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
