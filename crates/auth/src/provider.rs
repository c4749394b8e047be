//! Authentication provider trait

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::user::UserInfo;

/// Tokens returned from a successful sign-in
#[derive(Debug, Clone, Serialize)]
pub struct SessionTokens {
    /// Bearer token to present on later requests
    pub token: String,

    /// Seconds until the token expires
    pub expires_in: i64,
}

/// Authentication provider
///
/// Implement this trait to plug in another identity backend.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Validate a bearer token and return the authenticated user
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the token is missing, malformed, rejected by
    /// the backend, or expired.
    async fn validate(&self, token: &str) -> Result<UserInfo>;

    /// Exchange email/password credentials for a session token
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens>;

    /// Create a new account
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserInfo>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
