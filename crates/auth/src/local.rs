//! Local JWT provider
//!
//! Self-hosted deployments and tests run without the hosted identity
//! toolkit; tokens are HS256 JWTs signed with a shared secret. There is no
//! account store behind this provider: sign-in issues a token for the
//! presented email without checking a password. Only suitable for
//! development, single-tenant deployments behind other auth, and tests.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AuthError, Result};
use crate::provider::{AuthProvider, SessionTokens};
use crate::user::UserInfo;

/// Claims carried by locally issued tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user id)
    pub sub: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Local HS256 JWT provider
pub struct LocalJwtProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl std::fmt::Debug for LocalJwtProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalJwtProvider")
            .field("algorithm", &"HS256")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl LocalJwtProvider {
    /// Create a provider with an HMAC-SHA256 secret
    ///
    /// The secret should be at least 32 bytes.
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            token_ttl: Duration::hours(24),
        }
    }

    /// Set the lifetime of issued tokens
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Sign a token for the given user
    pub fn issue(&self, user_id: &str, email: &str) -> Result<SessionTokens> {
        let now = Utc::now();
        let expires_at = now + self.token_ttl;

        let claims = TokenClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Upstream(format!("failed to sign token: {}", e)))?;

        Ok(SessionTokens {
            token,
            expires_in: self.token_ttl.num_seconds(),
        })
    }
}

#[async_trait]
impl AuthProvider for LocalJwtProvider {
    async fn validate(&self, token: &str) -> Result<UserInfo> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!("token validation failed: {:?}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken,
                }
            })?;

        Ok(UserInfo::new(data.claims.sub, data.claims.email))
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<SessionTokens> {
        // No account store; any credential pair yields a token for that email
        self.issue(email, email)
    }

    async fn sign_up(&self, email: &str, _password: &str) -> Result<UserInfo> {
        Ok(UserInfo::new(email, email))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
