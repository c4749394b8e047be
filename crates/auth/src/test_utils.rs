//! Shared helpers for tests that need signed tokens
//!
//! Used by this crate's unit tests and by the API integration tests.

use chrono::Duration;

use crate::local::LocalJwtProvider;

/// Secret shared by test providers across crates
pub const TEST_SECRET: &[u8] = b"vend-test-secret-key-32-bytes!!!";

/// Mint a valid token for the given user
pub fn user_token(user_id: &str, email: &str) -> String {
    LocalJwtProvider::new(TEST_SECRET)
        .issue(user_id, email)
        .expect("sign test token")
        .token
}

/// Mint a token that expired an hour ago
pub fn expired_token(user_id: &str, email: &str) -> String {
    LocalJwtProvider::new(TEST_SECRET)
        .with_ttl(Duration::hours(-1))
        .issue(user_id, email)
        .expect("sign test token")
        .token
}
