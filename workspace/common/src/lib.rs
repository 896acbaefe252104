//! Browser-independent core of the profit predictor page.
//! Form validation, wire types of the prediction service, the prediction history and its
//! CSV export, and the data behind the charts. The frontend renders these; the host binary
//! publishes [`FrontendSettings`].

pub mod chart;
pub mod form;
pub mod format;
pub mod history;
pub mod model_info;
pub mod prediction;
pub mod service;
pub mod session;
pub mod settings;

pub use chart::{ComparisonChart, HistoryTrend, ImportanceChart};
pub use form::{FormError, PredictionForm, SpendField};
pub use format::{format_amount, format_currency};
pub use history::{ExportError, HistoryEntry, PredictionHistory};
pub use model_info::{FeatureImportance, FeatureImportances, ModelMeta};
pub use prediction::{PredictionRequest, PredictionResponse, SpendInputs, StartupState};
pub use service::PredictionService;
pub use session::{ModelInfoView, PredictorSession, SubmitError};
pub use settings::FrontendSettings;
