use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// Claims we read from the issued token. Signature is not verified here,
/// the synthesis endpoint does that.
#[derive(Debug, Deserialize)]
struct IssuedClaims {
    exp: i64,
}

/// Bearer token returned by the token endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Wrap a freshly issued token.
    ///
    /// The expiry is the earlier of the JWT `exp` claim (when the token is a
    /// JWT) and `issued_at + lifetime`.
    pub fn new(value: String, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        let local_expiry = issued_at + lifetime;
        let expires_at = match jwt_expiry(&value) {
            Some(exp) if exp < local_expiry => exp,
            _ => local_expiry,
        };

        Self { value, expires_at }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.value)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Short prefix safe to print in logs
    pub fn preview(&self) -> String {
        let head: String = self.value.chars().take(8).collect();
        format!("{}...", head)
    }
}

fn jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;

    let data = decode::<IssuedClaims>(token, &DecodingKey::from_secret(&[]), &validation).ok()?;
    Utc.timestamp_opt(data.claims.exp, 0).single()
}
