//! Authenticated user information

use serde::{Deserialize, Serialize};

/// The authenticated user attached to a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    /// User ID assigned by the provider
    pub id: String,

    /// Email address
    pub email: String,
}

impl UserInfo {
    /// Create user info from its parts
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}
