//! JWT encoding and validation.
//!
//! The identity provider hands out tokens whose `sub` claim is a stable
//! opaque subject identifier; the server uses it directly as the tenant
//! id and never interprets it further.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC signing secret (`JWT_SECRET`).
    pub secret: String,
    /// Token lifetime in seconds (`JWT_EXPIRY_SECS`, default 86400).
    pub expiry_secs: i64,
}

impl JwtConfig {
    /// Load from environment. Falls back to a development secret and
    /// warns, so unauthenticated local setups still boot.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development secret");
            "insecure-dev-secret".to_string()
        });
        let expiry_secs: i64 = std::env::var("JWT_EXPIRY_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()
            .expect("JWT_EXPIRY_SECS must be a valid i64");
        Self {
            secret,
            expiry_secs,
        }
    }
}

/// Claims carried by every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Opaque subject identifier, used directly as the tenant id.
    pub sub: String,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}

/// Issue a token for a subject. Used by dev tooling and tests.
pub fn create_token(subject: &str, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: subject.to_string(),
        exp: (Utc::now() + Duration::seconds(config.expiry_secs)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate a token and return its claims.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
