use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Therapy modalities with a guide in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum TherapyType {
    Cbt,
    Dbt,
    Act,
    Ipt,
    Psychodynamic,
    Exposure,
    Mindfulness,
    BehavioralActivation,
}

impl TherapyType {
    pub const ALL: [TherapyType; 8] = [
        Self::Cbt,
        Self::Dbt,
        Self::Act,
        Self::Ipt,
        Self::Psychodynamic,
        Self::Exposure,
        Self::Mindfulness,
        Self::BehavioralActivation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cbt => "cbt",
            Self::Dbt => "dbt",
            Self::Act => "act",
            Self::Ipt => "ipt",
            Self::Psychodynamic => "psychodynamic",
            Self::Exposure => "exposure",
            Self::Mindfulness => "mindfulness",
            Self::BehavioralActivation => "behavioral-activation",
        }
    }
}

impl fmt::Display for TherapyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TherapyType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownTherapyType(s.to_string()))
    }
}
