//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and mapping
//! `gloo-net` failures into the `String` errors the view models display.

use super::config::FrontendConfig;

/// Get the base URL for API requests
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/a001-item/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    FrontendConfig::from_window().api_base
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Отправка запроса и проверка статуса ответа
pub async fn send_checked(
    request: gloo_net::http::Request,
    what: &str,
) -> Result<gloo_net::http::Response, String> {
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        log::error!("{} failed: HTTP {}", what, response.status());
        return Err(format!("Failed to {}: {}", what, response.status()));
    }

    Ok(response)
}

/// GET + разбор JSON
pub async fn get_json<T: serde::de::DeserializeOwned>(path: &str, what: &str) -> Result<T, String> {
    let request = gloo_net::http::Request::get(&api_url(path))
        .header("Accept", "application/json")
        .build()
        .map_err(|e| format!("Failed to build request: {}", e))?;

    send_checked(request, what)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST с JSON-телом, ответ игнорируется
pub async fn post_json<B: serde::Serialize>(path: &str, body: &B, what: &str) -> Result<(), String> {
    let request = gloo_net::http::Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    send_checked(request, what).await.map(|_| ())
}

pub async fn delete(path: &str, what: &str) -> Result<(), String> {
    let request = gloo_net::http::Request::delete(&api_url(path))
        .build()
        .map_err(|e| format!("Failed to build request: {}", e))?;

    send_checked(request, what).await.map(|_| ())
}
