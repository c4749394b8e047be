//! Authentication configuration

use serde::Deserialize;

/// Which provider backs the auth endpoints
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthProviderKind {
    /// External identity toolkit (hosted)
    Identity,
    /// Local HS256 JWTs (self-hosted, development)
    #[default]
    Local,
}

/// Authentication configuration
///
/// # Example
///
/// ```toml
/// [auth]
/// provider = "identity"
/// api_key = "AIza..."
/// # endpoint = "https://identitytoolkit.googleapis.com/v1"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Provider selection
    pub provider: AuthProviderKind,

    /// Identity toolkit API key (required for the identity provider)
    pub api_key: String,

    /// Identity toolkit endpoint override
    pub endpoint: Option<String>,

    /// HS256 secret for the local provider; a random secret is generated
    /// at startup when empty
    pub jwt_secret: String,

    /// Lifetime of locally issued tokens, in seconds
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: AuthProviderKind::Local,
            api_key: String::new(),
            endpoint: None,
            jwt_secret: String::new(),
            token_ttl_secs: 24 * 60 * 60,
        }
    }
}
