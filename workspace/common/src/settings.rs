use crate::service::DEFAULT_API_BASE;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Path the frontend host publishes [`FrontendSettings`] at.
pub const SETTINGS_PATH: &str = "/settings.json";

/// Runtime settings the frontend reads from its host at startup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FrontendSettings {
    /// Base URL of the prediction service (e.g. "http://localhost:5001")
    pub api_base: String,
    /// Browser console log level: error, warn, info, debug or trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FrontendSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: default_log_level(),
        }
    }
}
