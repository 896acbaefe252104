use crate::api_client;
use async_trait::async_trait;
use common::service::{MODEL_INFO_FAILED, MODEL_INFO_PATH, PREDICTION_FAILED, PREDICT_PATH};
use common::{ModelMeta, PredictionRequest, PredictionResponse, PredictionService};

/// Ask the prediction service for a profit estimate
pub async fn predict(request: &PredictionRequest) -> Result<PredictionResponse, String> {
    log::debug!("Requesting prediction for state {}", request.state);
    let result: Result<PredictionResponse, String> =
        api_client::post(PREDICT_PATH, request, PREDICTION_FAILED).await;
    match &result {
        Ok(response) => log::info!("Predicted profit: {}", response.prediction),
        Err(e) => log::error!("Prediction failed: {}", e),
    }
    result
}

/// Fetch metadata about the trained model
pub async fn get_model_info() -> Result<ModelMeta, String> {
    log::trace!("Fetching model info");
    let result: Result<ModelMeta, String> =
        api_client::get(MODEL_INFO_PATH, MODEL_INFO_FAILED).await;
    if let Ok(meta) = &result {
        log::info!(
            "Model info loaded ({} importances)",
            meta.importances().len()
        );
    }
    result
}

/// [`PredictionService`] backed by the browser's fetch API.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpPredictionService;

#[async_trait(?Send)]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, String> {
        predict(request).await
    }

    async fn model_info(&self) -> Result<ModelMeta, String> {
        get_model_info().await
    }
}
