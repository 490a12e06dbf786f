//! HTTP server core implementation

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer as ActixHttpServer};
use tracing::info;

use crate::auth::rbac::PermissionMatrix;
use crate::auth::AuthSystem;
use crate::config::{Config, ServerConfig};
use crate::registry::HttpCivilRegistry;
use crate::server::middleware::AuthMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use crate::utils::error::{AppError, Result};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Wire up storage, the permission matrix, the registry client, and
    /// the identity service.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = Arc::new(StorageLayer::new(&config.database).await?);
        let matrix = Arc::new(PermissionMatrix::builtin());
        let registry = Arc::new(HttpCivilRegistry::new(&config.registry)?);

        let auth = AuthSystem::new(&config.auth, storage.clone(), matrix, registry);
        let state = AppState::new(config.clone(), auth, storage);

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);
        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || {
            let cors_config = &state.config.server.cors;
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            if cors_config.allows_all_origins() {
                cors = cors.allow_any_origin();
            } else {
                for origin in &cors_config.allowed_origins {
                    cors = cors.allowed_origin(origin);
                }
            }

            App::new()
                .app_data(state.clone())
                .wrap(AuthMiddleware)
                .wrap(cors)
                .wrap(Logger::default())
                .configure(routes::configure)
        })
        .bind(&bind_addr)
        .map_err(|e| AppError::config(format!("Failed to bind {}: {}", bind_addr, e)))?
        .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
