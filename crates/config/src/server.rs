//! HTTP server configuration

use serde::Deserialize;

/// HTTP server settings
///
/// # Example
///
/// ```toml
/// [server]
/// host = "0.0.0.0"   # default
/// port = 8000        # default
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Bind address in `host:port` form
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
