//! Request middleware

mod auth;
mod guards;
mod helpers;

#[cfg(test)]
mod tests;

pub use auth::AuthMiddleware;
pub use guards::{RequirePermission, RequireRole};
pub use helpers::{extract_bearer_token, is_public_route};
