use common::service::{endpoint_url, DEFAULT_API_BASE};
use common::settings::{FrontendSettings, SETTINGS_PATH};
use gloo_net::http::Request;
use log::Level;
use web_sys::window;

const API_BASE_KEY: &str = "profit_api_base";
const LOG_LEVEL_KEY: &str = "profit_log_level";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the prediction service (e.g. "http://localhost:5001")
    pub api_base: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }
            settings.apply_local_overrides();
        }

        settings
    }

    /// Apply what the frontend host published, then re-apply localStorage on top.
    pub fn apply_host_settings(&mut self, host: &FrontendSettings) {
        if !host.api_base.trim().is_empty() {
            self.api_base = host.api_base.trim().to_string();
        }
        if let Some(level) = parse_level(&host.log_level) {
            self.log_level = level;
        }
        self.apply_local_overrides();
    }

    fn apply_local_overrides(&mut self) {
        let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };

        if let Ok(Some(api_base)) = storage.get_item(API_BASE_KEY) {
            if !api_base.trim().is_empty() {
                self.api_base = api_base.trim().to_string();
            }
        }

        if let Ok(Some(log_level)) = storage.get_item(LOG_LEVEL_KEY) {
            if let Some(level) = parse_level(&log_level) {
                self.log_level = level;
            }
        }
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        endpoint_url(&self.api_base, endpoint)
    }
}

pub fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

/// Fetch `/settings.json` from the page's own origin and merge it in.
///
/// A page opened without the host binary has no such file; the defaults stay.
pub async fn load_host_settings() {
    let response = match Request::get(SETTINGS_PATH).send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            log::debug!("No host settings (HTTP {}), keeping defaults", response.status());
            return;
        }
        Err(e) => {
            log::debug!("Host settings unavailable: {}", e);
            return;
        }
    };

    match response.json::<FrontendSettings>().await {
        Ok(host) => {
            log::info!("Loaded host settings: {:?}", host);
            update_settings(|settings| settings.apply_host_settings(&host));
        }
        Err(e) => log::warn!("Ignoring malformed host settings: {}", e),
    }
}
