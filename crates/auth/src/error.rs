//! Authentication error types

use thiserror::Error;

/// Result type for auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur during authentication operations
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token is missing or empty
    #[error("missing authentication token")]
    MissingToken,

    /// Token failed validation
    #[error("invalid authentication token")]
    InvalidToken,

    /// Token has expired
    #[error("authentication token expired")]
    TokenExpired,

    /// Sign-up with an email that already has an account
    #[error("an account with this email already exists")]
    EmailExists,

    /// Sign-in with an unknown email
    #[error("no account with this email")]
    UserNotFound,

    /// Sign-in with a wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Identity provider failed or answered with something unexpected
    #[error("identity provider error: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Upstream(err.to_string())
    }
}
