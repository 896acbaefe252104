//! State of one page session: the latest result, the comparison chart, the prediction
//! history and whether a request is in flight.

use crate::chart::{ComparisonChart, ImportanceChart};
use crate::form::{FormError, PredictionForm};
use crate::format::format_currency;
use crate::history::{ExportError, PredictionHistory};
use crate::model_info::{ModelMeta, MODEL_INFO_UNAVAILABLE};
use crate::prediction::{PredictionRequest, PredictionResponse};
use crate::service::PredictionService;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error("{0}")]
    Failed(String),
    #[error("A prediction is already in flight")]
    Busy,
}

impl SubmitError {
    /// Text of the blocking alert for this failure.
    pub fn alert_message(&self) -> String {
        match self {
            Self::Invalid(err) => err.user_message().to_string(),
            Self::Failed(message) => format!("Error: {}", message),
            Self::Busy => self.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictorSession {
    result: Option<f64>,
    comparison: ComparisonChart,
    history: PredictionHistory,
    busy: bool,
}

impl PredictorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form and mark the session busy.
    ///
    /// Refused with [`SubmitError::Busy`] while an earlier request has not completed.
    /// An invalid form leaves the session untouched.
    pub fn begin(&mut self, form: &PredictionForm) -> Result<PredictionRequest, SubmitError> {
        if self.busy {
            debug!("Submission refused, a prediction is already in flight");
            return Err(SubmitError::Busy);
        }

        let request = form.to_request().map_err(|err| {
            warn!("Rejected prediction form: {}", err);
            SubmitError::Invalid(err)
        })?;
        self.busy = true;
        debug!("Submitting prediction request: {:?}", request);
        Ok(request)
    }

    /// Apply the outcome of the request started by [`begin`](Self::begin).
    ///
    /// The session is no longer busy afterwards, whatever the outcome.
    pub fn complete(
        &mut self,
        request: &PredictionRequest,
        outcome: Result<PredictionResponse, String>,
        at: DateTime<Utc>,
    ) -> Result<f64, SubmitError> {
        self.busy = false;

        let response = outcome.map_err(|message| {
            error!("Prediction failed: {}", message);
            SubmitError::Failed(message)
        })?;

        let inputs = request.inputs();
        self.result = Some(response.prediction);
        self.comparison = ComparisonChart::new(inputs.total(), response.prediction);
        self.history.record(inputs, response.prediction, at);
        info!("Prediction received: {}", response.prediction);

        Ok(response.prediction)
    }

    /// Run a whole submission against `service`.
    pub async fn submit<S>(
        &mut self,
        form: &PredictionForm,
        service: &S,
    ) -> Result<f64, SubmitError>
    where
        S: PredictionService + ?Sized,
    {
        let request = self.begin(form)?;
        let outcome = service.predict(&request).await;
        self.complete(&request, outcome, Utc::now())
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// Result panel text, `None` until the first successful prediction.
    pub fn result_text(&self) -> Option<String> {
        self.result.map(format_currency)
    }

    pub fn comparison(&self) -> ComparisonChart {
        self.comparison
    }

    pub fn history(&self) -> &PredictionHistory {
        &self.history
    }

    pub fn export_csv(&self) -> Result<String, ExportError> {
        self.history.to_csv()
    }
}

/// What the model-info panel shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModelInfoView {
    #[default]
    Loading,
    Ready {
        meta: ModelMeta,
        chart: ImportanceChart,
    },
    Unavailable,
}

impl ModelInfoView {
    pub fn from_result(result: Result<ModelMeta, String>) -> Self {
        match result {
            Ok(meta) => {
                let chart = ImportanceChart::from_importances(&meta.importances());
                Self::Ready { meta, chart }
            }
            Err(err) => {
                warn!("model-info fetch failed: {}", err);
                Self::Unavailable
            }
        }
    }

    pub fn importance_chart(&self) -> Option<&ImportanceChart> {
        match self {
            Self::Ready { chart, .. } => Some(chart),
            _ => None,
        }
    }

    pub fn fallback_message(&self) -> Option<&'static str> {
        match self {
            Self::Unavailable => Some(MODEL_INFO_UNAVAILABLE),
            _ => None,
        }
    }
}

/// Fetch the model metadata once; failures become [`ModelInfoView::Unavailable`].
pub async fn load_model_info<S>(service: &S) -> ModelInfoView
where
    S: PredictionService + ?Sized,
{
    ModelInfoView::from_result(service.model_info().await)
}
