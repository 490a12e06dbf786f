//! HTTP route modules

pub mod account;
pub mod auth;
pub mod health;

use actix_web::web;

/// Register every route of the service.
///
/// Shared between the production server and the integration tests so
/// both exercise the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .configure(auth::configure_routes)
                .configure(account::configure_routes),
        );
}
