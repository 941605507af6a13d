use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown assessment type: {0}")]
    UnknownAssessmentType(String),

    #[error("unknown therapy type: {0}")]
    UnknownTherapyType(String),

    #[error("unknown emotion: {0}")]
    UnknownEmotion(String),
}
