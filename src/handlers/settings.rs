use axum::{extract::State, response::Json};
use common::settings::FrontendSettings;
use tracing::{instrument, trace};
use crate::schemas::AppState;

/// Runtime settings for the frontend
#[utoipa::path(
    get,
    path = "/settings.json",
    tag = "settings",
    responses(
        (status = 200, description = "Settings the page applies at startup", body = FrontendSettings)
    )
)]
#[instrument]
pub async fn get_frontend_settings(State(state): State<AppState>) -> Json<FrontendSettings> {
    trace!("Serving frontend settings: {:?}", state.frontend);
    Json(state.frontend.as_ref().clone())
}
