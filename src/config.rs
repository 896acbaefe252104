use crate::schemas::AppState;
use common::settings::FrontendSettings;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid bind address {address:?}: {reason}")]
    InvalidBindAddress { address: String, reason: String },
    #[error("prediction API base must be an http(s) URL, got {0:?}")]
    InvalidApiBase(String),
    #[error("unknown frontend log level {0:?} (expected one of error, warn, info, debug, trace)")]
    InvalidLogLevel(String),
}

/// Resolved configuration of the `serve` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ServeConfig {
    pub bind_address: SocketAddr,
    pub dist_dir: PathBuf,
    pub frontend: FrontendSettings,
}

impl ServeConfig {
    pub fn new(
        bind_address: &str,
        dist_dir: PathBuf,
        api_base: &str,
        frontend_log_level: &str,
    ) -> Result<Self, ConfigError> {
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddress {
                address: bind_address.to_string(),
                reason: e.to_string(),
            })?;

        let api_base = api_base.trim().trim_end_matches('/');
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(ConfigError::InvalidApiBase(api_base.to_string()));
        }

        let log_level = frontend_log_level.trim().to_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(frontend_log_level.to_string()));
        }

        Ok(Self {
            bind_address,
            dist_dir,
            frontend: FrontendSettings {
                api_base: api_base.to_string(),
                log_level,
            },
        })
    }
}

/// Initialize application state from the resolved configuration
pub fn initialize_app_state(config: &ServeConfig) -> AppState {
    if !config.dist_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}; build the frontend first (trunk build)",
            config.dist_dir.display()
        );
    }

    AppState {
        dist_dir: Arc::new(config.dist_dir.clone()),
        frontend: Arc::new(config.frontend.clone()),
    }
}
