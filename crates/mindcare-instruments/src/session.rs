//! Response collection for a single assessment-taking session.
//!
//! A `ResponseSet` is created when a clinician starts a questionnaire and
//! discarded once it is finished or abandoned. It holds at most one
//! response per question; answering a question again replaces the earlier
//! answer.

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use mindcare_core::models::assessment::AssessmentType;

use crate::error::InstrumentError;
use crate::scoring::{AssessmentDefinition, Response, SeverityBand};
use crate::{Instrument, instrument};

pub struct ResponseSet {
    instrument: Box<dyn Instrument>,
    responses: Vec<Response>,
}

/// Score and interpretation of a finished (possibly partial) response set.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentOutcome {
    pub assessment_type: AssessmentType,
    pub score: i32,
    pub max_score: i32,
    pub answered: usize,
    pub total_questions: usize,
    pub band: SeverityBand,
}

impl AssessmentOutcome {
    pub fn is_complete(&self) -> bool {
        self.answered == self.total_questions
    }
}

impl ResponseSet {
    pub fn new(assessment_type: AssessmentType) -> Self {
        Self {
            instrument: instrument(assessment_type),
            responses: Vec::new(),
        }
    }

    pub fn assessment_type(&self) -> AssessmentType {
        self.instrument.assessment_type()
    }

    pub fn definition(&self) -> &AssessmentDefinition {
        self.instrument.definition()
    }

    /// Record the answer to one question, replacing any earlier answer.
    ///
    /// Fails for question ids the assessment does not define and for values
    /// outside the question's option set.
    pub fn record(
        &mut self,
        question_id: impl Into<String>,
        value: i32,
    ) -> Result<(), InstrumentError> {
        let response = Response::new(question_id, value);
        if self.definition().question(&response.question_id).is_none() {
            return Err(InstrumentError::UnknownQuestion {
                instrument_id: self.instrument.id().to_string(),
                question_id: response.question_id,
            });
        }
        if let Some(err) = self
            .instrument
            .validate_responses(std::slice::from_ref(&response))
            .into_iter()
            .next()
        {
            return Err(err.into());
        }

        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == response.question_id)
        {
            Some(existing) => existing.value = response.value,
            None => self.responses.push(response),
        }
        Ok(())
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Question ids without a recorded answer, in questionnaire order.
    pub fn unanswered(&self) -> Vec<&str> {
        self.definition()
            .questions
            .iter()
            .filter(|q| !self.responses.iter().any(|r| r.question_id == q.id))
            .map(|q| q.id.as_str())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.unanswered().is_empty()
    }

    /// Score what has been answered so far and interpret the result.
    pub fn finish(self) -> AssessmentOutcome {
        let score = self.instrument.calculate_score(&self.responses);
        let band = self.instrument.interpret_score(score).clone();
        let definition = self.instrument.definition();
        let outcome = AssessmentOutcome {
            assessment_type: self.instrument.assessment_type(),
            score,
            max_score: definition.max_score,
            answered: self.responses.len(),
            total_questions: definition.questions.len(),
            band,
        };
        info!(
            instrument = self.instrument.id(),
            score = outcome.score,
            band = %outcome.band.label,
            complete = outcome.is_complete(),
            "assessment finished"
        );
        outcome
    }
}
