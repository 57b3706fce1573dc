// Application state
// Shared handles injected into every request handler

use crate::store::Store;
use std::sync::Arc;

/// Process-wide context, built once at startup
///
/// Cloning is cheap: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Wrap a store for use as axum router state
    pub fn new<S: Store + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Borrow the store
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
