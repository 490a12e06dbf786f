//! Database configuration

use serde::{Deserialize, Serialize};

/// Default on-disk store; `mode=rwc` creates the file on first run
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/comuna.db?mode=rwc";

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL
    #[serde(default = "default_url")]
    pub url: String,
    /// Maximum pool connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Pool acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            connect_timeout: default_connect_timeout(),
            acquire_timeout: default_acquire_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Load from `DATABASE_URL` and pool tuning variables
    pub fn from_env() -> Self {
        Self {
            url: super::super::env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            max_connections: super::super::env_parse_or("DATABASE_MAX_CONNECTIONS", default_max_connections()),
            connect_timeout: super::super::env_parse_or("DATABASE_CONNECT_TIMEOUT", default_connect_timeout()),
            acquire_timeout: super::super::env_parse_or("DATABASE_ACQUIRE_TIMEOUT", default_acquire_timeout()),
        }
    }
}

fn default_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_acquire_timeout() -> u64 {
    30
}
