/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("Playback failed: {0}")]
    Playback(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78,
            Self::BadRequest(_) => 64,
            Self::Unauthorized(_) => 77,
            Self::Synthesis(_) => 69,
            Self::Playback(_) => 74,
            Self::Internal(_) => 70,
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
