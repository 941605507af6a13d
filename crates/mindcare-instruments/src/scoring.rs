use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use mindcare_core::models::assessment::AssessmentType;

/// Inclusive integer score range `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub low: i32,
    pub high: i32,
}

impl ScoreRange {
    pub fn contains(&self, score: i32) -> bool {
        score >= self.low && score <= self.high
    }
}

/// One selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: i32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Unique within its assessment, e.g. `phq9_3`.
    pub id: String,
    pub text: String,
    pub options: Vec<ResponseOption>,
}

impl Question {
    pub fn option(&self, value: i32) -> Option<&ResponseOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// A labeled score range with its clinical interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub range: ScoreRange,
    pub label: String,
    pub description: String,
    /// Display color as a hex string, e.g. `#fb923c`.
    pub color: String,
    pub recommendations: Vec<String>,
}

/// Static definition of a questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDefinition {
    pub assessment_type: AssessmentType,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub max_score: i32,
    pub severity_bands: Vec<SeverityBand>,
}

impl AssessmentDefinition {
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

/// An answer to a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub question_id: String,
    pub value: i32,
}

impl Response {
    pub fn new(question_id: impl Into<String>, value: i32) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: String,
    pub value: i32,
    pub allowed_values: Vec<i32>,
    pub message: String,
}
