//! Identity operations: cedula verification, registration, login

use tracing::{debug, info, warn};

use crate::core::models::{Cedula, User, UserSummary};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::DataValidator;

use super::password;
use super::system::AuthSystem;
use super::types::{AuthSession, CedulaLookup, RegistrationRequest};

impl AuthSystem {
    /// Resolve a national ID to a local account or registry candidate.
    ///
    /// Local storage is authoritative; the external registry is only
    /// consulted on a local miss, and its failures degrade to `Unknown`
    /// rather than failing the request.
    pub async fn check_cedula(&self, raw: &str) -> Result<CedulaLookup> {
        DataValidator::require("cedula", raw)?;
        let cedula: Cedula = raw.parse()?;

        if let Some(user) = self.storage.db().find_user_by_cedula(&cedula.to_string()).await? {
            debug!(cedula = %cedula, "cedula already registered");
            return Ok(CedulaLookup::Registered {
                name: user.name,
                surname: user.surname,
            });
        }

        match self.registry.lookup(&cedula).await {
            Ok(Some(record)) => Ok(CedulaLookup::Candidate {
                name: record.name,
                surname: record.surname,
            }),
            Ok(None) => Ok(CedulaLookup::Unknown),
            Err(e) => {
                // Registry trouble must never fail the check itself.
                warn!(cedula = %cedula, "civil registry lookup failed: {}", e);
                Ok(CedulaLookup::Unknown)
            }
        }
    }

    /// Register a new citizen account and issue its first session.
    ///
    /// The store's unique index on the cedula is the final authority on
    /// duplicates; the pre-check only produces a friendlier early error.
    pub async fn register(&self, request: RegistrationRequest) -> Result<AuthSession> {
        DataValidator::require("cedula", &request.cedula)?;
        DataValidator::validate_name("name", &request.name)?;
        DataValidator::validate_name("surname", &request.surname)?;
        DataValidator::validate_password(&request.password)?;

        let cedula: Cedula = request.cedula.parse()?;
        let cedula = cedula.to_string();

        if self.storage.db().find_user_by_cedula(&cedula).await?.is_some() {
            return Err(AppError::conflict("An account with this cedula already exists"));
        }

        let password_hash = password::hash_password(&request.password)?;
        let user = User::new(cedula, &request.name, &request.surname, password_hash);

        let created = self.storage.db().create_user(&user).await?;
        info!(account = %created.id, "account registered");

        self.issue_session(created)
    }

    /// Authenticate by cedula and password, issuing a session.
    ///
    /// Unknown account and wrong password are indistinguishable to the
    /// caller.
    pub async fn login(&self, raw_cedula: &str, plaintext: &str) -> Result<AuthSession> {
        DataValidator::require("cedula", raw_cedula)?;
        DataValidator::require("password", plaintext)?;
        let cedula: Cedula = raw_cedula.parse()?;

        let user = match self
            .storage
            .db()
            .find_user_by_cedula(&cedula.to_string())
            .await?
        {
            Some(user) => user,
            None => return Err(AppError::InvalidCredentials),
        };

        if !password::verify_password(plaintext, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        info!(account = %user.id, "login succeeded");
        self.issue_session(user)
    }

    /// Sign a token for the account and attach its permission snapshot
    fn issue_session(&self, user: User) -> Result<AuthSession> {
        let token = self.jwt.create_access_token(user.id, user.role)?;
        let permissions = self.matrix.permissions_for(user.role);

        Ok(AuthSession {
            token,
            user: UserSummary::from(&user),
            permissions,
        })
    }
}
