//! Database handle types

use sea_orm::DatabaseConnection;

/// Which backing store the service ended up on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    /// Configured persistent store
    Persistent,
    /// Ephemeral in-memory fallback; data does not survive restarts
    InMemory,
}

/// Account store handle
#[derive(Debug, Clone)]
pub struct Database {
    pub(super) db: DatabaseConnection,
    pub(super) backend_type: DatabaseBackendType,
}

impl Database {
    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Whether the service is running on the ephemeral fallback
    pub fn is_in_memory_fallback(&self) -> bool {
        self.backend_type == DatabaseBackendType::InMemory
    }

    /// Get the underlying connection
    pub fn connection(&self) -> &sea_orm::DatabaseConnection {
        &self.db
    }
}
