use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::therapy::TherapyType;

/// A canned suggestion surfaced to the client during a chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub text: String,
    /// Set when the suggestion points at a specific therapy guide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapy_type: Option<TherapyType>,
}

impl Recommendation {
    pub fn general(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            therapy_type: None,
        }
    }

    pub fn therapy(text: impl Into<String>, therapy_type: TherapyType) -> Self {
        Self {
            text: text.into(),
            therapy_type: Some(therapy_type),
        }
    }
}
