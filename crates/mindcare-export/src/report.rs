use serde::Serialize;
use tracing::debug;

use mindcare_core::models::message::{Message, Sender};
use mindcare_insights::recommendations::personalized_recommendations;
use mindcare_insights::summary::generate_summary;
use mindcare_instruments::Instrument;
use mindcare_instruments::scoring::Response;
use mindcare_instruments::session::AssessmentOutcome;
use mindcare_instruments::therapy::therapy_guide;

use crate::error::ExportError;
use crate::render::render_template;

const ASSESSMENT_TEMPLATE: &str = include_str!("../templates/assessment.txt.tera");
const SESSION_TEMPLATE: &str = include_str!("../templates/session.txt.tera");

/// Template context for a finished assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub title: String,
    pub clinician: Option<String>,
    pub generated_at: String,
    pub score: i32,
    pub max_score: i32,
    pub answered: usize,
    pub total_questions: usize,
    pub band_label: String,
    pub band_description: String,
    pub recommendations: Vec<String>,
    /// Structured question/answer listing from the instrument.
    pub responses: String,
}

impl AssessmentReport {
    pub fn new(
        outcome: &AssessmentOutcome,
        instrument: &dyn Instrument,
        responses: &[Response],
        clinician: Option<&str>,
    ) -> Self {
        Self {
            title: instrument.definition().title.clone(),
            clinician: clinician.map(str::to_string),
            generated_at: jiff::Timestamp::now().to_string(),
            score: outcome.score,
            max_score: outcome.max_score,
            answered: outcome.answered,
            total_questions: outcome.total_questions,
            band_label: outcome.band.label.clone(),
            band_description: outcome.band.description.clone(),
            recommendations: outcome.band.recommendations.clone(),
            responses: instrument.to_structured_input(responses),
        }
    }

    pub fn render(&self) -> Result<String, ExportError> {
        debug!(title = %self.title, "rendering assessment report");
        render_template("assessment.txt", ASSESSMENT_TEMPLATE, self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptLine {
    pub sender: &'static str,
    pub text: String,
    /// Label and score, e.g. "negative, -1.5". Absent for bot messages.
    pub sentiment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRecommendation {
    pub text: String,
    /// Display name of the linked therapy guide.
    pub therapy: Option<String>,
}

/// Template context for a chat session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub clinician: Option<String>,
    pub generated_at: String,
    pub summary: String,
    pub transcript: Vec<TranscriptLine>,
    pub recommendations: Vec<ReportRecommendation>,
}

impl SessionReport {
    pub fn from_messages(messages: &[Message], clinician: Option<&str>) -> Self {
        let transcript = messages
            .iter()
            .map(|m| TranscriptLine {
                sender: match m.sender {
                    Sender::User => "user",
                    Sender::Bot => "bot",
                },
                text: m.text.clone(),
                sentiment: m
                    .sentiment
                    .map(|s| format!("{}, {}", s.label, s.score)),
            })
            .collect();

        let recommendations = personalized_recommendations(messages)
            .into_iter()
            .map(|r| ReportRecommendation {
                therapy: r
                    .therapy_type
                    .and_then(therapy_guide)
                    .map(|g| g.name.clone()),
                text: r.text,
            })
            .collect();

        Self {
            clinician: clinician.map(str::to_string),
            generated_at: jiff::Timestamp::now().to_string(),
            summary: generate_summary(messages),
            transcript,
            recommendations,
        }
    }

    pub fn render(&self) -> Result<String, ExportError> {
        debug!(messages = self.transcript.len(), "rendering session report");
        render_template("session.txt", SESSION_TEMPLATE, self)
    }
}
