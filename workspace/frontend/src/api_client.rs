pub mod prediction;

use crate::settings;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

/// Common GET request handler.
///
/// `failure` is the message returned for any non-success status.
pub async fn get<T>(endpoint: &str, failure: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::error!("GET {} - HTTP error: {}", endpoint, response.status());
        return Err(failure.to_string());
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

/// Common POST request handler; the body is sent as JSON.
///
/// `failure` is the message returned for any non-success status.
pub async fn post<T, B>(endpoint: &str, body: &B, failure: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        if let Ok(body) = response.text().await {
            log::debug!("POST {} - Error body: {}", endpoint, body);
        }
        return Err(failure.to_string());
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let data: T = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    log::info!("POST {} - Success", endpoint);
    Ok(data)
}
