use common::settings::FrontendSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Directory holding the built frontend bundle
    pub dist_dir: Arc<PathBuf>,
    /// Settings published to the frontend
    pub frontend: Arc<FrontendSettings>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Frontend bundle status ("present" or "missing")
    pub frontend: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::settings::get_frontend_settings,
    ),
    components(
        schemas(
            HealthResponse,
            FrontendSettings,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "settings", description = "Frontend runtime settings"),
    ),
    info(
        title = "Profit Predictor Frontend Host",
        description = "Serves the profit predictor page and the settings it reads at startup",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
