//! HTTP server configuration

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load from `HOST` / `PORT` / `CORS_ALLOWED_ORIGINS`
    pub fn from_env() -> Self {
        Self {
            host: super::super::env_or("HOST", &default_host()),
            port: super::super::env_parse_or("PORT", default_port()),
            cors: CorsConfig::from_env(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; empty allows any origin (SPA development)
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Load from `CORS_ALLOWED_ORIGINS` (comma-separated)
    pub fn from_env() -> Self {
        let raw = super::super::env_or("CORS_ALLOWED_ORIGINS", "");
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { allowed_origins }
    }

    /// Whether any origin is accepted
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}
