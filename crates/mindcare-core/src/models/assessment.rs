use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The questionnaires the catalog ships. The set is closed; adding one
/// means adding a variant here and an instrument definition alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentType {
    /// Patient Health Questionnaire, depression.
    Phq9,
    /// Generalized Anxiety Disorder scale.
    Gad7,
    /// PTSD Checklist (short form).
    Pcl5,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 3] = [Self::Phq9, Self::Gad7, Self::Pcl5];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phq9 => "phq9",
            Self::Gad7 => "gad7",
            Self::Pcl5 => "pcl5",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownAssessmentType(s.to_string()))
    }
}
