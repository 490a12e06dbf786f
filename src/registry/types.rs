//! Civil-registry trait and data types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::models::Cedula;
use crate::utils::error::Result;

/// Identity data returned by the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryRecord {
    /// First name
    pub name: String,
    /// Surname
    pub surname: String,
}

/// Identity-verification collaborator.
///
/// `Ok(None)` means the registry answered but knows nothing (or returned
/// a negative/malformed payload); `Err(Dependency)` means it could not be
/// reached in time. The distinction exists for logging — callers collapse
/// both to the same client-facing "not found".
#[async_trait]
pub trait CivilRegistry: Send + Sync {
    /// Look up a normalized national ID
    async fn lookup(&self, cedula: &Cedula) -> Result<Option<RegistryRecord>>;
}
