//! Logging configuration

use serde::Deserialize;

/// Log level
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level - very verbose
    Trace,
    /// Debug level - debugging information
    Debug,
    /// Info level - normal operation (default)
    #[default]
    Info,
    /// Warn level - something unexpected but recoverable
    Warn,
    /// Error level - failures only
    Error,
}

impl LogLevel {
    /// Level name as a tracing filter directive
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging configuration
///
/// # Example
///
/// ```toml
/// [log]
/// level = "info"   # trace | debug | info | warn | error
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level to emit
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        let config: LogConfig = toml::from_str("level = \"warn\"").unwrap();
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.level.as_str(), "warn");
    }

    #[test]
    fn test_default_level() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
