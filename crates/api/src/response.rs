//! Uniform response envelope
//!
//! Every response body is `{data, error_details}`; exactly one side is
//! set. Clients branch on which one is null.

use serde::Serialize;

/// Response envelope
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    /// Payload on success
    pub data: Option<T>,

    /// Error details on failure
    pub error_details: Option<serde_json::Value>,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a successful payload
    pub fn data(value: T) -> Self {
        Self {
            data: Some(value),
            error_details: None,
        }
    }
}

impl Envelope<()> {
    /// Wrap error details
    pub fn error(details: impl Into<serde_json::Value>) -> Self {
        Self {
            data: None,
            error_details: Some(details.into()),
        }
    }
}
