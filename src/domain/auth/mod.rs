pub mod error;
pub mod service;
pub mod token;

pub use error::AuthServiceError;
pub use service::{AuthService, MAX_TOKEN_LIFETIME};
pub use token::AccessToken;
