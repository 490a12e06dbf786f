//! Authentication and authorization
//!
//! Three collaborating pieces: the permission matrix (`rbac`), the
//! identity and session service (`AuthSystem`), and the token machinery
//! (`jwt`, `password`). Request-side enforcement lives in
//! `server::middleware`.

pub mod jwt;
pub mod password;
pub mod rbac;

mod identity;
mod system;
mod types;

pub use system::AuthSystem;
pub use types::{AuthSession, AuthenticatedUser, CedulaLookup, RegistrationRequest};
