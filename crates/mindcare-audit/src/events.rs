use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

/// A chat message flagged for human review.
///
/// Raised when a message's sentiment score drops below the escalation
/// threshold or it contains a self-harm indicator. The message text is not
/// carried; collaborators look it up by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SevereContentEvent {
    /// `None` when free text was analyzed outside a chat session.
    pub message_id: Option<Uuid>,
    pub score: f64,
    /// Self-harm indicator words found in the text, in order of appearance.
    pub severe_terms: Vec<String>,
    pub detected_at: jiff::Timestamp,
}

impl SevereContentEvent {
    pub fn new(message_id: Option<Uuid>, score: f64, severe_terms: Vec<String>) -> Self {
        Self {
            message_id,
            score,
            severe_terms,
            detected_at: jiff::Timestamp::now(),
        }
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        let message_id = self
            .message_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        warn!(
            safety.message_id = %message_id,
            safety.score = self.score,
            safety.severe_terms = ?self.severe_terms,
            safety.detected_at = %self.detected_at,
            "potential severe negative sentiment detected"
        );
    }
}
