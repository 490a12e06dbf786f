//! Server bootstrap

use tracing::info;

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;

/// Load configuration from the environment and run the server
pub async fn run_server() -> Result<()> {
    info!("Starting Comuna gateway");

    let config = Config::from_env();
    let server = HttpServer::new(&config).await?;

    info!(
        "Gateway starting at http://{}:{}",
        config.server.host, config.server.port
    );
    info!("API endpoints:");
    info!("   GET  /health - health check");
    info!("   POST /api/auth/check-cedula - cedula verification");
    info!("   POST /api/auth/register - account registration");
    info!("   POST /api/auth/login - login");
    info!("   GET  /api/me - current account (authenticated)");
    info!("   GET  /api/users - account listing (user.management)");

    server.start().await
}
