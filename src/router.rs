use crate::handlers::{health::health_check, settings::get_frontend_settings};
use crate::schemas::{ApiDoc, AppState};
use axum::{response::Json, routing::get, Router};
use common::settings::SETTINGS_PATH;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Unknown paths fall back to index.html so the page loads from any URL
    let index = state.dist_dir.join("index.html");
    let static_files = ServeDir::new(state.dist_dir.as_ref()).fallback(ServeFile::new(index));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Runtime settings read by the frontend at startup
        .route(SETTINGS_PATH, get(get_frontend_settings))
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        // Frontend bundle
        .fallback_service(static_files)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
