//! Error handling for the gateway
//!
//! This module provides the crate-wide error type, helper constructors,
//! and the HTTP response mapping.

mod helpers;
mod response;
mod types;

#[cfg(test)]
mod tests;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{AppError, Result};
