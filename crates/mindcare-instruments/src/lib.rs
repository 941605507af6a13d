//! mindcare-instruments
//!
//! Standardized questionnaire definitions and the therapy guide catalog.
//! Pure data, no I/O. Defines the questions, options, and severity bands
//! for each supported assessment, plus the rules that turn responses into
//! a score and a score into a severity band.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod session;
pub mod therapy;

use std::sync::LazyLock;

use mindcare_core::models::assessment::AssessmentType;
use tracing::{debug, warn};

use error::InstrumentError;
use scoring::{AssessmentDefinition, Response, ScoreRange, SeverityBand, ValidationError};

/// Trait implemented by each questionnaire.
pub trait Instrument: Send + Sync {
    fn assessment_type(&self) -> AssessmentType;

    /// Catalog identifier (e.g., "phq9", "gad7").
    fn id(&self) -> &str {
        self.assessment_type().as_str()
    }

    /// Short display name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    fn definition(&self) -> &AssessmentDefinition;

    /// Sum of every response value. Partial sets give partial sums and
    /// values are not checked against the option set. The sum saturates at
    /// the `i32` bounds.
    fn calculate_score(&self, responses: &[Response]) -> i32 {
        let score = responses
            .iter()
            .fold(0i32, |acc, r| acc.saturating_add(r.value));
        debug!(instrument = self.id(), responses = responses.len(), score, "scored responses");
        score
    }

    /// First severity band whose inclusive range contains `score`, or the
    /// `Unknown` sentinel when none does.
    fn interpret_score(&self, score: i32) -> &SeverityBand {
        band_for(self.definition(), score)
    }

    fn recommendations(&self, score: i32) -> &[String] {
        &self.interpret_score(score).recommendations
    }

    /// Scores in `0..=max_score` that no severity band covers.
    fn coverage_gaps(&self) -> Vec<i32> {
        let def = self.definition();
        (0..=def.max_score)
            .filter(|s| !def.severity_bands.iter().any(|b| b.range.contains(*s)))
            .collect()
    }

    /// Report responses whose value is not one of the question's options.
    /// Responses for unknown question ids are ignored here.
    fn validate_responses(&self, responses: &[Response]) -> Vec<ValidationError> {
        let def = self.definition();
        let mut errors = Vec::new();
        for response in responses {
            if let Some(question) = def.question(&response.question_id)
                && question.option(response.value).is_none()
            {
                let allowed_values: Vec<i32> = question.options.iter().map(|o| o.value).collect();
                errors.push(ValidationError {
                    question_id: response.question_id.clone(),
                    value: response.value,
                    message: format!(
                        "{}: value {} for '{}' is not one of {:?}",
                        self.name(),
                        response.value,
                        question.id,
                        allowed_values,
                    ),
                    allowed_values,
                });
            }
        }
        errors
    }

    /// Format responses as structured text, one line per answered question.
    fn to_structured_input(&self, responses: &[Response]) -> String {
        let def = self.definition();
        let mut output = format!("## {}\n\n", self.name());
        for question in &def.questions {
            if let Some(response) = responses.iter().find(|r| r.question_id == question.id) {
                let label = question
                    .option(response.value)
                    .map(|o| o.label.as_str())
                    .unwrap_or("unlisted value");
                output.push_str(&format!(
                    "- {}: {} ({})\n",
                    question.text, label, response.value
                ));
            }
        }
        output
    }
}

/// Band returned when a score falls outside every defined range.
pub fn unknown_band() -> &'static SeverityBand {
    static UNKNOWN: LazyLock<SeverityBand> = LazyLock::new(|| SeverityBand {
        range: ScoreRange { low: 0, high: 0 },
        label: "Unknown".to_string(),
        description: "Score could not be interpreted".to_string(),
        color: "#d1d5db".to_string(),
        recommendations: vec!["Reassess with a complete questionnaire".to_string()],
    });
    &UNKNOWN
}

fn band_for(def: &AssessmentDefinition, score: i32) -> &SeverityBand {
    match def.severity_bands.iter().find(|band| band.range.contains(score)) {
        Some(band) => band,
        None => {
            warn!(instrument = %def.assessment_type, score, "score outside every severity band");
            unknown_band()
        }
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    AssessmentType::ALL.into_iter().map(instrument).collect()
}

pub fn instrument(assessment_type: AssessmentType) -> Box<dyn Instrument> {
    match assessment_type {
        AssessmentType::Phq9 => Box::new(instruments::phq9::Phq9),
        AssessmentType::Gad7 => Box::new(instruments::gad7::Gad7),
        AssessmentType::Pcl5 => Box::new(instruments::pcl5::Pcl5),
    }
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    id.parse::<AssessmentType>().ok().map(instrument)
}

/// Like [`get_instrument`], but an unknown ID is an error.
pub fn lookup_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

pub fn definition(assessment_type: AssessmentType) -> &'static AssessmentDefinition {
    match assessment_type {
        AssessmentType::Phq9 => instruments::phq9::definition(),
        AssessmentType::Gad7 => instruments::gad7::definition(),
        AssessmentType::Pcl5 => instruments::pcl5::definition(),
    }
}

pub fn calculate_score(assessment_type: AssessmentType, responses: &[Response]) -> i32 {
    instrument(assessment_type).calculate_score(responses)
}

pub fn interpret_score(assessment_type: AssessmentType, score: i32) -> &'static SeverityBand {
    band_for(definition(assessment_type), score)
}

pub fn recommendations(assessment_type: AssessmentType, score: i32) -> &'static [String] {
    &interpret_score(assessment_type, score).recommendations
}
