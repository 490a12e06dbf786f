//! SeaORM database implementation

mod connection;
mod types;
mod user_ops;

pub use types::{Database, DatabaseBackendType};
