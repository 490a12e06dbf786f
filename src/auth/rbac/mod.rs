//! Role-based access control
//!
//! The permission matrix is the single source of truth for "what can
//! role R do in module M". It is built once at startup and shared
//! read-only; absence at any level denies.

mod matrix;
mod types;


pub use matrix::PermissionMatrix;
pub use types::{ModulePermissions, PermissionValue};
