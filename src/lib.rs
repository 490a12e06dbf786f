//! # Comuna Gateway
//!
//! Backend service for the "Banco Obrero — Comuna Inteligente" civic
//! platform. The service owns three things:
//!
//! - **Permission model**: a static role → module → permission matrix,
//!   built once at startup and enforced fail-closed.
//! - **Identity and sessions**: cedula verification (local store first,
//!   civil-registry fallback), registration with argon2 credential
//!   hashing, and login issuing stateless signed tokens.
//! - **Access control**: per-request middleware verifying sessions and
//!   gating module operations on the caller's role.
//!
//! ## Running
//!
//! ```rust,no_run
//! use comuna_gateway::server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     server::builder::run_server().await?;
//!     Ok(())
//! }
//! ```
//!
//! Configuration comes from the environment (`DATABASE_URL`,
//! `JWT_SECRET`, `PORT`, `REGISTRY_URL`, ...); see `config`.

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod registry;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use utils::error::{AppError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
