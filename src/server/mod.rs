//! HTTP server
//!
//! Actix-web composition: shared state, the authentication middleware,
//! role/permission guards, and the route modules.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;
