use axum::{extract::State, response::Json};
use tracing::{debug, instrument};
use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let index = state.dist_dir.join("index.html");
    let frontend_status = match tokio::fs::try_exists(&index).await {
        Ok(true) => "present".to_string(),
        Ok(false) => "missing".to_string(),
        Err(e) => {
            debug!("Could not check {}: {}", index.display(), e);
            "missing".to_string()
        }
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        frontend: frontend_status,
    };

    Json(response)
}
