use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid api key: {0}")]
    Invalid(String),
    #[error("invalid token lifetime: {0}")]
    Lifetime(String),
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::Invalid(msg) => AppError::BadRequest(msg),
            AuthServiceError::Dependency(msg) => AppError::Unauthorized(msg),
            AuthServiceError::Lifetime(msg) => AppError::Config(msg),
        }
    }
}
