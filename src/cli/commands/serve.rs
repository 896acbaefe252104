use anyhow::Result;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, debug, trace, error};

use crate::config::{initialize_app_state, ServeConfig};
use crate::router::create_router;

pub async fn serve(
    bind_address: &str,
    dist_dir: PathBuf,
    api_base: &str,
    frontend_log_level: &str,
) -> Result<()> {
    trace!("Entering serve function");
    info!("Profit predictor host starting up");

    let config = match ServeConfig::new(bind_address, dist_dir, api_base, frontend_log_level) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };
    debug!("Frontend dist dir: {}", config.dist_dir.display());
    debug!("Prediction API base: {}", config.frontend.api_base);

    // Initialize application state
    trace!("Initializing application state");
    let state = initialize_app_state(&config);

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Profit predictor running on http://{}", config.bind_address);
    info!("OpenAPI document at http://{}/api-docs/openapi.json", config.bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
