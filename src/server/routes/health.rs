//! Health check endpoint

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::server::state::AppState;
use crate::storage::database::DatabaseBackendType;

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    database: &'static str,
}

/// Liveness/readiness probe; degrades when the store stops answering
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let status = match state.storage.health_check().await {
        Ok(()) => "ok",
        Err(_) => "degraded",
    };

    let database = match state.storage.db().backend_type() {
        DatabaseBackendType::Persistent => "persistent",
        DatabaseBackendType::InMemory => "in-memory",
    };

    HttpResponse::Ok().json(HealthResponse {
        status,
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
