use async_trait::async_trait;

/// Repository for issuing bearer tokens.
/// Abstracts the authentication endpoint that trades an API key for a
/// short-lived token.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Exchange the API key for a token
    ///
    /// # Errors
    /// Returns error if the endpoint is unreachable, rejects the key, or
    /// returns an empty body
    async fn issue_token(&self, api_key: &str) -> Result<String, String>;
}
