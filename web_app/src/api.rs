//! REST client over the browser fetch API.
//!
//! Thin wrappers around `window.fetch` returning decoded JSON. Failures are
//! values, never panics: the dashboard turns them into toast notifications
//! and keeps its last-known-good state.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Default backend mount point, same origin.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(format!("{value:?}"))
    }
}

async fn fetch_text(method: &str, url: &str, body: Option<String>) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch returned a non-Response value".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let text = JsFuture::from(response.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

pub async fn get_json<T: DeserializeOwned>(base: &str, path: &str) -> Result<T, ApiError> {
    let text = fetch_text("GET", &format!("{base}{path}"), None).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    base: &str,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let body = serde_json::to_string(body)?;
    let text = fetch_text("PUT", &format!("{base}{path}"), Some(body)).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn post_empty(base: &str, path: &str) -> Result<(), ApiError> {
    fetch_text("POST", &format!("{base}{path}"), None).await.map(|_| ())
}

pub async fn delete(base: &str, path: &str) -> Result<(), ApiError> {
    fetch_text("DELETE", &format!("{base}{path}"), None).await.map(|_| ())
}
