//! Bearer token extraction
//!
//! Adapter between axum and the auth provider: reads the token from the
//! Authorization header and validates it before a handler runs.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use vend_auth::{AuthError, AuthProvider, UserInfo};

use crate::response::Envelope;

/// Trait for app state that can validate tokens
pub trait HasAuthProvider: Send + Sync {
    /// Get the auth provider
    fn auth_provider(&self) -> Arc<dyn AuthProvider>;
}

/// Authenticated user extractor
///
/// # Example
///
/// ```ignore
/// async fn handler(user: AuthUser) -> impl IntoResponse {
///     format!("hello, {}", user.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserInfo);

impl std::ops::Deref for AuthUser {
    type Target = UserInfo;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection carrying the envelope-shaped 401
#[derive(Debug)]
pub struct AuthRejection(AuthError);

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = Envelope::error(serde_json::Value::String(self.0.to_string()));
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: HasAuthProvider + Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let token = extract_token(parts).ok_or(AuthRejection(AuthError::MissingToken))?;

        let user = state.auth_provider().validate(&token).await.map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            AuthRejection(match e {
                AuthError::TokenExpired => AuthError::TokenExpired,
                AuthError::MissingToken => AuthError::MissingToken,
                _ => AuthError::InvalidToken,
            })
        })?;

        Ok(AuthUser(user))
    }
}

/// Read the bearer token from the Authorization header.
///
/// A bare token without the `Bearer ` prefix is accepted as well.
fn extract_token(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(AUTHORIZATION)?;
    let value = header.to_str().ok()?;

    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
