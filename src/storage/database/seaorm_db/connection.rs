//! Database connection with in-memory fallback

use std::time::Duration;

use sea_orm::{ConnectOptions, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info, warn};

use crate::config::DatabaseConfig;
use crate::utils::error::{AppError, Result};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{Database, DatabaseBackendType};

/// Ephemeral fallback store
const MEMORY_URL: &str = "sqlite::memory:";

impl Database {
    /// Connect to the configured store, falling back to an ephemeral
    /// in-memory database when it is unreachable.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        match Self::try_connect(&config.url, config).await {
            Ok(db) => {
                info!("Database connection established ({})", config.url);
                Ok(Self {
                    db,
                    backend_type: if is_memory_url(&config.url) {
                        DatabaseBackendType::InMemory
                    } else {
                        DatabaseBackendType::Persistent
                    },
                })
            }
            Err(e) => {
                warn!(
                    "Database connection failed: {}. Falling back to ephemeral in-memory store; \
                     accounts will not survive a restart.",
                    e
                );
                let db = Self::try_connect(MEMORY_URL, config).await?;
                Ok(Self {
                    db,
                    backend_type: DatabaseBackendType::InMemory,
                })
            }
        }
    }

    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        ensure_sqlite_parent_dir(url)?;

        let mut opt = ConnectOptions::new(url.to_string());

        // A private in-memory sqlite exists per connection; the pool must
        // stay at one connection or each would see its own empty store.
        let max_connections = if is_memory_url(url) {
            1
        } else {
            config.max_connections
        };

        opt.max_connections(max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .acquire_timeout(Duration::from_secs(config.acquire_timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        sea_orm::Database::connect(opt)
            .await
            .map_err(AppError::Database)
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations");
        Migrator::up(&self.db, None)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    /// Health check: a trivial query against the users table
    pub async fn health_check(&self) -> Result<()> {
        use sea_orm::EntityTrait;
        use sea_orm::QuerySelect;

        debug!("Performing database health check");
        entities::User::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(AppError::Database)?;
        Ok(())
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// `mode=rwc` creates the database file, but not its directory
fn ensure_sqlite_parent_dir(url: &str) -> Result<()> {
    if let Some(path) = url.strip_prefix("sqlite://") {
        if is_memory_url(url) {
            return Ok(());
        }
        let path = path.split('?').next().unwrap_or(path);
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(AppError::Io)?;
            }
        }
    }
    Ok(())
}
