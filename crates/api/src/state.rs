//! Application state
//!
//! Shared state for the API handlers: the snapshot store, the analytics
//! engine over it, and the auth provider.

use std::sync::Arc;

use vend_analytics::SalesEngine;
use vend_auth::AuthProvider;
use vend_dataset::SalesStore;

use crate::auth::HasAuthProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Cached sales snapshot
    pub store: Arc<SalesStore>,

    /// Analytics engine over the snapshot
    pub engine: Arc<SalesEngine>,

    /// Authentication provider
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    /// Create application state over a store and an auth provider
    pub fn new(store: Arc<SalesStore>, auth: Arc<dyn AuthProvider>) -> Self {
        let engine = Arc::new(SalesEngine::new(Arc::clone(&store)));
        Self {
            store,
            engine,
            auth,
        }
    }
}

impl HasAuthProvider for AppState {
    fn auth_provider(&self) -> Arc<dyn AuthProvider> {
        Arc::clone(&self.auth)
    }
}
