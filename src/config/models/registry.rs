//! Civil-registry collaborator configuration

use serde::{Deserialize, Serialize};

/// Civil-registry collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Base URL of the identity-verification API; `None` disables the
    /// external lookup (check-cedula degrades to local-store-only)
    #[serde(default)]
    pub base_url: Option<String>,
    /// Lookup timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl RegistryConfig {
    /// Load from `REGISTRY_URL` / `REGISTRY_TIMEOUT_MS`
    pub fn from_env() -> Self {
        let raw = super::super::env_or("REGISTRY_URL", "");
        let base_url = if raw.trim().is_empty() {
            None
        } else {
            Some(raw.trim().trim_end_matches('/').to_string())
        };

        Self {
            base_url,
            timeout_ms: super::super::env_parse_or("REGISTRY_TIMEOUT_MS", default_timeout_ms()),
        }
    }
}

fn default_timeout_ms() -> u64 {
    3000
}
