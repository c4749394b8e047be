//! Sales snapshot configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Snapshot location
///
/// # Example
///
/// ```toml
/// [dataset]
/// path = "data/"   # default
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Directory holding the Parquet snapshot
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/"),
        }
    }
}
