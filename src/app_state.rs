//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use crate::store::DemoStore;

/// The state of the server: the shared, immutable demo data.
///
/// Route handlers derive their own narrower state structs from this via
/// `FromRef`, so each handler declares only the data it uses.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The demo data backing every page.
    pub store: Arc<DemoStore>,
}

impl AppState {
    /// Create a new [AppState] wrapping `store`.
    pub fn new(store: DemoStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
