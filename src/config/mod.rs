//! Configuration management
//!
//! All runtime configuration comes from the process environment (with a
//! `.env` file loaded via dotenvy when present). Each concern has its own
//! config struct under `models`.

pub mod models;

pub use models::auth::{warn_insecure_config, AuthConfig};
pub use models::database::DatabaseConfig;
pub use models::registry::RegistryConfig;
pub use models::server::{CorsConfig, ServerConfig};

use serde::{Deserialize, Serialize};

/// Root gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Civil-registry collaborator configuration
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Missing variables fall back to development defaults; insecure
    /// fallbacks are reported via `warn_insecure_config`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let config = Self {
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            database: DatabaseConfig::from_env(),
            registry: RegistryConfig::from_env(),
        };

        warn_insecure_config(&config.auth);
        config
    }
}

/// Read an environment variable with a default
pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back on the default
/// when the variable is missing or unparseable
pub(crate) fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
