//! External identity toolkit client
//!
//! Account creation, password sign-in and token validation are delegated
//! to a hosted identity provider speaking the Identity Toolkit REST
//! dialect. In this mode the service never checks a password or verifies a
//! token signature itself; a token is valid when the provider says so.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{AuthError, Result};
use crate::provider::{AuthProvider, SessionTokens};
use crate::user::UserInfo;

/// Default Identity Toolkit endpoint
pub const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";

/// Request timeout towards the identity toolkit
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Identity toolkit connection settings
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// REST endpoint base
    pub endpoint: String,

    /// Project API key, appended to every call
    pub api_key: String,
}

impl IdentityConfig {
    /// Config against the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the endpoint (testing, regional deployments)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Identity toolkit backed provider
pub struct IdentityProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for IdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityProvider")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl IdentityProvider {
    /// Create a provider from connection settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (TLS or
    /// proxy misconfiguration).
    pub fn new(config: IdentityConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vend/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AuthError::Upstream(format!("identity HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
            api_key: config.api_key,
        })
    }

    fn url(&self, action: &str) -> String {
        format!("{}/accounts:{}?key={}", self.endpoint, action, self.api_key)
    }

    /// POST an accounts action and decode the response
    async fn post<T: DeserializeOwned>(
        &self,
        action: &str,
        body: serde_json::Value,
    ) -> Result<T> {
        let response = self.client.post(self.url(action)).json(&body).send().await?;

        if response.status().is_success() {
            return response.json::<T>().await.map_err(AuthError::from);
        }

        let status = response.status();
        let code = response
            .json::<ErrorEnvelope>()
            .await
            .map(|e| e.error.message)
            .unwrap_or_default();

        debug!(action, %status, code = %code, "identity toolkit rejected request");
        Err(map_error_code(&code, status))
    }
}

#[async_trait]
impl AuthProvider for IdentityProvider {
    async fn validate(&self, token: &str) -> Result<UserInfo> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let response: LookupResponse = self.post("lookup", json!({ "idToken": token })).await?;
        let user = response.users.into_iter().next().ok_or(AuthError::InvalidToken)?;

        Ok(UserInfo::new(user.local_id, user.email))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens> {
        let response: SignInResponse = self
            .post(
                "signInWithPassword",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        let expires_in = response.expires_in.parse().unwrap_or(3600);
        Ok(SessionTokens {
            token: response.id_token,
            expires_in,
        })
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<UserInfo> {
        let response: SignUpResponse = self
            .post(
                "signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        Ok(UserInfo::new(response.local_id, email))
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Map an identity toolkit error code to a typed error
///
/// Codes sometimes carry a suffix, e.g. `TOO_MANY_ATTEMPTS_TRY_LATER :
/// retry later`; only the leading word is matched.
fn map_error_code(code: &str, status: reqwest::StatusCode) -> AuthError {
    let code = code.split_whitespace().next().unwrap_or("");

    match code {
        "EMAIL_EXISTS" => AuthError::EmailExists,
        "EMAIL_NOT_FOUND" => AuthError::UserNotFound,
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" => AuthError::InvalidCredentials,
        "INVALID_ID_TOKEN" | "USER_NOT_FOUND" | "USER_DISABLED" => AuthError::InvalidToken,
        "TOKEN_EXPIRED" => AuthError::TokenExpired,
        "" => AuthError::Upstream(format!("unexpected status {}", status)),
        other => AuthError::Upstream(format!("{} ({})", other, status)),
    }
}

// Response payloads

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
    #[serde(default)]
    expires_in: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> reqwest::StatusCode {
        reqwest::StatusCode::from_u16(code).unwrap()
    }

    #[test]
    fn test_error_code_mapping() {
        assert!(matches!(
            map_error_code("EMAIL_EXISTS", status(400)),
            AuthError::EmailExists
        ));
        assert!(matches!(
            map_error_code("EMAIL_NOT_FOUND", status(400)),
            AuthError::UserNotFound
        ));
        assert!(matches!(
            map_error_code("INVALID_LOGIN_CREDENTIALS", status(400)),
            AuthError::InvalidCredentials
        ));
        assert!(matches!(
            map_error_code("INVALID_PASSWORD", status(400)),
            AuthError::InvalidCredentials
        ));
        assert!(matches!(
            map_error_code("INVALID_ID_TOKEN", status(400)),
            AuthError::InvalidToken
        ));
        assert!(matches!(
            map_error_code("TOKEN_EXPIRED", status(401)),
            AuthError::TokenExpired
        ));
    }

    #[test]
    fn test_error_code_with_suffix() {
        assert!(matches!(
            map_error_code("EMAIL_EXISTS : the email is taken", status(400)),
            AuthError::EmailExists
        ));
    }

    #[test]
    fn test_unknown_code_is_upstream() {
        let err = map_error_code("TOO_MANY_ATTEMPTS_TRY_LATER", status(429));
        assert!(matches!(err, AuthError::Upstream(_)));
        assert!(err.to_string().contains("TOO_MANY_ATTEMPTS_TRY_LATER"));
    }

    #[test]
    fn test_empty_code_is_upstream() {
        assert!(matches!(
            map_error_code("", status(500)),
            AuthError::Upstream(_)
        ));
    }

    #[test]
    fn test_url_shape() {
        let provider = IdentityProvider::new(
            IdentityConfig::new("k3y").with_endpoint("http://localhost:9099/v1"),
        )
        .unwrap();
        assert_eq!(
            provider.url("lookup"),
            "http://localhost:9099/v1/accounts:lookup?key=k3y"
        );
    }
}
