//! Authentication result types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::models::{Role, UserSummary};

use super::rbac::ModulePermissions;

/// Verified caller identity, attached to requests by the auth middleware
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Account ID from the token subject
    pub user_id: Uuid,
    /// Role from the token
    pub role: Role,
}

/// Issued session: token plus the client-safe account payload
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    /// Signed bearer token
    pub token: String,
    /// Account summary (no credential material)
    pub user: UserSummary,
    /// Permission snapshot for the account's role
    pub permissions: ModulePermissions,
}

/// Outcome of a cedula verification
#[derive(Debug, Clone)]
pub enum CedulaLookup {
    /// An account with this cedula already exists locally
    Registered {
        /// First name on the account
        name: String,
        /// Surname on the account
        surname: String,
    },
    /// No local account, but the civil registry knows the person;
    /// candidate data for prefilling registration
    Candidate {
        /// First name from the registry
        name: String,
        /// Surname from the registry
        surname: String,
    },
    /// No local account and no registry data (including registry
    /// unavailability, which is deliberately not surfaced)
    Unknown,
}

/// Registration input after route-level validation
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    /// Raw cedula as sent by the client
    pub cedula: String,
    /// First name
    pub name: String,
    /// Surname
    pub surname: String,
    /// Plaintext password; hashed immediately, never stored or logged
    pub password: String,
}
