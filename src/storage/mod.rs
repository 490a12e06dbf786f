//! Storage layer
//!
//! The account store is the only shared mutable resource in the service
//! and the single authority for national-ID uniqueness. No in-process
//! caching of accounts sits in front of it.

/// Database storage module
pub mod database;

use std::sync::Arc;

use tracing::info;

use crate::config::DatabaseConfig;
use crate::utils::error::Result;

/// Main storage layer
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
}

impl StorageLayer {
    /// Connect and run migrations
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("Initializing storage layer");

        let database = Arc::new(database::Database::new(config).await?);
        database.migrate().await?;

        Ok(Self { database })
    }

    /// Get the database handle
    pub fn db(&self) -> &database::Database {
        &self.database
    }

    /// Storage health check
    pub async fn health_check(&self) -> Result<()> {
        self.database.health_check().await
    }
}
