use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinician-facing talking points for a detected emotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CounselorGuidance {
    pub suggested_questions: Vec<String>,
    /// Differential considerations. Empty when nothing specific is indicated.
    pub potential_diagnoses: Vec<String>,
    pub recommended_approach: String,
}
