//! Core JWT handler implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::core::models::Role;
use crate::utils::error::{AppError, Result};

use super::types::{Claims, JwtHandler};

impl JwtHandler {
    /// Create a new JWT handler
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration: config.jwt_expiration,
        }
    }

    /// Create an access token for an account.
    ///
    /// Signing failures propagate as an error result.
    pub fn create_access_token(&self, user_id: Uuid, role: Role) -> Result<String> {
        let now = unix_now()?;

        let claims = Claims {
            sub: user_id,
            role,
            iat: now,
            exp: now + self.expiration,
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(AppError::Jwt)?;

        debug!("Issued access token for account {}", user_id);
        Ok(token)
    }

    /// Verify signature and expiry, returning the decoded claims
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(self.algorithm);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            warn!("JWT verification failed: {}", e);
            AppError::Jwt(e)
        })?;

        Ok(token_data.claims)
    }
}

fn unix_now() -> Result<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::internal(format!("System time error: {}", e)))?
        .as_secs())
}
