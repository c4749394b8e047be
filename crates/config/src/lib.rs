//! Vend Configuration
//!
//! TOML-based configuration with sensible defaults. An empty document is a
//! runnable development setup (local auth, snapshot under `data/`).
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use std::str::FromStr;
//! use vend_config::Config;
//!
//! let config = Config::from_str("[dataset]\npath = \"data/\"").unwrap();
//! ```
//!
//! # Example Full Config
//!
//! See `configs/example.toml` for all available options.

mod auth;
mod dataset;
mod error;
mod logging;
mod server;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

pub use auth::{AuthConfig, AuthProviderKind};
pub use dataset::DatasetConfig;
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogLevel};
pub use server::ServerConfig;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Logging configuration
    pub log: LogConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Sales snapshot location
    pub dataset: DatasetConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field requirements the type system cannot express
    fn validate(&self) -> Result<()> {
        if self.auth.provider == AuthProviderKind::Identity && self.auth.api_key.is_empty() {
            return Err(ConfigError::missing_field("auth", "api_key"));
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
