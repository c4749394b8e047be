//! Vend Auth
//!
//! Authentication for the sales API. All three credential operations
//! (account creation, sign-in, bearer token validation) go through the
//! `AuthProvider` trait.
//!
//! Two providers are included:
//!
//! - `IdentityProvider`: delegates everything to an external identity
//!   toolkit over REST. The service never inspects credentials itself.
//! - `LocalJwtProvider`: HS256 tokens signed with a shared secret, for
//!   self-hosted deployments and tests.
//!
//! # Usage
//!
//! ```ignore
//! use vend_auth::{AuthProvider, LocalJwtProvider};
//!
//! let provider = LocalJwtProvider::new(b"your-secret-key-at-least-32-bytes!");
//! let user = provider.validate(&token).await?;
//! ```

pub mod error;
pub mod identity;
pub mod local;
pub mod provider;
pub mod test_utils;
pub mod user;

pub use error::{AuthError, Result};
pub use identity::{IdentityConfig, IdentityProvider};
pub use local::{LocalJwtProvider, TokenClaims};
pub use provider::{AuthProvider, SessionTokens};
pub use user::UserInfo;
