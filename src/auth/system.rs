//! Core authentication system implementation

use std::sync::Arc;

use tracing::info;

use crate::config::AuthConfig;
use crate::registry::CivilRegistry;
use crate::storage::StorageLayer;
use crate::utils::error::{AppError, Result};

use super::jwt::JwtHandler;
use super::rbac::PermissionMatrix;
use super::types::AuthenticatedUser;

/// Identity and session service.
///
/// Owns cedula verification, registration, login, and token issuance.
/// All collaborators are injected and shared read-only.
#[derive(Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    pub(super) config: Arc<AuthConfig>,
    /// Account store
    pub(super) storage: Arc<StorageLayer>,
    /// JWT handler
    pub(super) jwt: Arc<JwtHandler>,
    /// Permission matrix
    pub(super) matrix: Arc<PermissionMatrix>,
    /// External civil-registry collaborator
    pub(super) registry: Arc<dyn CivilRegistry>,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(
        config: &AuthConfig,
        storage: Arc<StorageLayer>,
        matrix: Arc<PermissionMatrix>,
        registry: Arc<dyn CivilRegistry>,
    ) -> Self {
        info!("Initializing authentication system");

        let jwt = Arc::new(JwtHandler::new(config));

        Self {
            config: Arc::new(config.clone()),
            storage,
            jwt,
            matrix,
            registry,
        }
    }

    /// Verify a bearer token, yielding the caller identity
    pub fn authenticate(&self, token: &str) -> Result<AuthenticatedUser> {
        let claims = self
            .jwt
            .verify_token(token)
            .map_err(|_| AppError::Unauthenticated)?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }

    /// Get the JWT handler
    pub fn jwt(&self) -> &JwtHandler {
        &self.jwt
    }

    /// Get the permission matrix
    pub fn matrix(&self) -> &PermissionMatrix {
        &self.matrix
    }

    /// Get the authentication configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}
