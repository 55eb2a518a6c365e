use super::token_repository::TokenRepository;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Token endpoint client (`/sts/v1.0/issueToken`)
pub struct StsTokenRepository {
    token_url: Url,
    http_client: reqwest::Client,
}

impl StsTokenRepository {
    pub fn new(token_url: Url, timeout: Duration) -> Result<Self, String> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            token_url,
            http_client,
        })
    }
}

#[async_trait]
impl TokenRepository for StsTokenRepository {
    async fn issue_token(&self, api_key: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(url = %self.token_url, "Requesting access token");

        let response = self
            .http_client
            .post(self.token_url.clone())
            .header(SUBSCRIPTION_KEY_HEADER, api_key)
            .header(reqwest::header::CONTENT_LENGTH, "0")
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %self.token_url, "Token request failed");
                format!("Token request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                body = %error_text,
                "Token endpoint rejected the request"
            );
            return Err(format!("Token endpoint returned {}: {}", status, error_text));
        }

        let token = response
            .text()
            .await
            .map_err(|e| format!("Failed to read token response: {}", e))?
            .trim()
            .to_string();

        if token.is_empty() {
            return Err("Token endpoint returned an empty token".to_string());
        }

        tracing::debug!(
            latency_ms = start_time.elapsed().as_millis(),
            token_length = token.len(),
            "Access token received"
        );

        Ok(token)
    }
}
