//! Authentication configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Insecure development fallback for the signing secret. Kept for parity
/// with the original deployment scripts; flagged loudly at startup.
pub const DEFAULT_JWT_SECRET: &str = "secret";

/// Token lifetime in seconds (100 hours)
pub const DEFAULT_JWT_EXPIRATION: u64 = 360_000;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
        }
    }
}

impl AuthConfig {
    /// Load from `JWT_SECRET` / `JWT_EXPIRATION`
    pub fn from_env() -> Self {
        Self {
            jwt_secret: super::super::env_or("JWT_SECRET", DEFAULT_JWT_SECRET),
            jwt_expiration: super::super::env_parse_or("JWT_EXPIRATION", DEFAULT_JWT_EXPIRATION),
        }
    }

    /// Whether the configuration is safe for a real deployment
    pub fn is_production_ready(&self) -> bool {
        self.jwt_secret != DEFAULT_JWT_SECRET && self.jwt_secret.len() >= 32
    }
}

/// Warn about insecure configuration at startup
pub fn warn_insecure_config(config: &AuthConfig) {
    if config.jwt_secret == DEFAULT_JWT_SECRET {
        warn!(
            "JWT_SECRET is not set; using the insecure built-in fallback. \
             Set JWT_SECRET before deploying."
        );
    } else if config.jwt_secret.len() < 32 {
        warn!("JWT_SECRET is shorter than 32 characters; consider a longer secret.");
    }
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_jwt_expiration() -> u64 {
    DEFAULT_JWT_EXPIRATION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiration_is_100_hours() {
        let config = AuthConfig::default();
        assert_eq!(config.jwt_expiration, 360_000);
    }

    #[test]
    fn test_default_secret_is_not_production_ready() {
        assert!(!AuthConfig::default().is_production_ready());
    }

    #[test]
    fn test_long_secret_is_production_ready() {
        let config = AuthConfig {
            jwt_secret: "a".repeat(48),
            ..AuthConfig::default()
        };
        assert!(config.is_production_ready());
    }
}
