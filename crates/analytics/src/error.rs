//! Analytics error types

use thiserror::Error;

/// Analytics errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Query lacks an employee/product/store filter
    #[error("at least one employee, product or store key is required")]
    MissingBusinessKey,

    /// Filter combination the builder cannot produce reached the engine
    #[error("malformed query: {0}")]
    MalformedQuery(String),

    /// Row selection or aggregation failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Snapshot unavailable (from vend-dataset)
    #[error(transparent)]
    Dataset(#[from] vend_dataset::DatasetError),
}

impl From<polars::error::PolarsError> for AnalyticsError {
    fn from(err: polars::error::PolarsError) -> Self {
        AnalyticsError::QueryFailed(err.to_string())
    }
}

/// Result type for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;
