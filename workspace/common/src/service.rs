use crate::model_info::ModelMeta;
use crate::prediction::{PredictionRequest, PredictionResponse};
use async_trait::async_trait;

pub const PREDICT_PATH: &str = "/predict";
pub const MODEL_INFO_PATH: &str = "/model-info";

/// Error message for a `/predict` call that did not succeed.
pub const PREDICTION_FAILED: &str = "Prediction request failed";

/// Error message for a `/model-info` call that did not succeed.
pub const MODEL_INFO_FAILED: &str = "No model info";

/// Default base URL of the prediction service.
pub const DEFAULT_API_BASE: &str = "http://localhost:5001";

/// Access to the external prediction service.
///
/// Errors are plain messages; they end up verbatim in a user alert.
#[async_trait(?Send)]
pub trait PredictionService {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, String>;

    async fn model_info(&self) -> Result<ModelMeta, String>;
}

/// Join the service base URL and an endpoint path without doubling the slash.
pub fn endpoint_url(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}
