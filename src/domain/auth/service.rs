use super::{AccessToken, AuthServiceError};
use crate::infrastructure::repositories::TokenRepository;
use chrono::Utc;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on the local token lifetime; issued tokens are valid for ten minutes
pub const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(600);

pub struct AuthService {
    token_repo: Arc<dyn TokenRepository>,
    token_lifetime: chrono::Duration,
    cache: Cache<String, AccessToken>,
}

impl AuthService {
    pub fn new(
        token_repo: Arc<dyn TokenRepository>,
        token_lifetime: Duration,
    ) -> Result<Self, AuthServiceError> {
        if token_lifetime.is_zero() || token_lifetime > MAX_TOKEN_LIFETIME {
            return Err(AuthServiceError::Lifetime(format!(
                "{}s is outside 1..={}s",
                token_lifetime.as_secs(),
                MAX_TOKEN_LIFETIME.as_secs()
            )));
        }
        let lifetime = chrono::Duration::from_std(token_lifetime)
            .map_err(|e| AuthServiceError::Lifetime(e.to_string()))?;

        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(token_lifetime)
            .build();

        Ok(Self {
            token_repo,
            token_lifetime: lifetime,
            cache,
        })
    }

    /// Return a valid bearer token for the key, issuing a new one when the
    /// cached token is missing or stale.
    pub async fn access_token(&self, api_key: &str) -> Result<AccessToken, AuthServiceError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(AuthServiceError::Invalid(
                "API key must not be empty".to_string(),
            ));
        }

        if let Some(cached) = self.cache.get(api_key).await {
            if !cached.is_expired_at(Utc::now()) {
                tracing::debug!(
                    expires_at = %cached.expires_at(),
                    "Reusing cached access token"
                );
                return Ok(cached);
            }
            self.cache.invalidate(api_key).await;
        }

        let issued_at = Utc::now();
        let raw = self
            .token_repo
            .issue_token(api_key)
            .await
            .map_err(AuthServiceError::Dependency)?;

        let token = AccessToken::new(raw, issued_at, self.token_lifetime);

        tracing::info!(
            token_preview = %token.preview(),
            expires_at = %token.expires_at(),
            "Access token issued"
        );
        tracing::debug!(token = %token.value(), "Full access token");

        self.cache.insert(api_key.to_string(), token.clone()).await;

        Ok(token)
    }
}
