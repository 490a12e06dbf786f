//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::storage::StorageLayer;

/// HTTP server state shared across handlers.
///
/// All fields are wrapped in Arc for cheap sharing across workers; none
/// are mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (read-only)
    pub config: Arc<Config>,
    /// Identity and session service
    pub auth: Arc<AuthSystem>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, auth: AuthSystem, storage: Arc<StorageLayer>) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            storage,
        }
    }
}
