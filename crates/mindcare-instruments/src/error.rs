use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument '{0}' (expected phq9, gad7, or pcl5)")]
    UnknownInstrument(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown question '{question_id}' for instrument '{instrument_id}'")]
    UnknownQuestion {
        instrument_id: String,
        question_id: String,
    },
}
