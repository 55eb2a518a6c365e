use crate::domain::auth::AuthServiceError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("authentication failed: {0}")]
    Authentication(#[from] AuthServiceError),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("synthesis failed: {0}")]
    Synthesis(String),
    #[error("playback failed: {0}")]
    Playback(String),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Authentication(e) => e.into(),
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Synthesis(msg) => AppError::Synthesis(msg),
            TtsServiceError::Playback(msg) => AppError::Playback(msg),
        }
    }
}
