//! HTTP layer: transport, bearer auth, status mapping.
//!
//! This is the only place that interprets status codes. `client.rs` works with
//! typed results.

use crate::error::ApiError;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
}

impl HttpBackend {
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one request and decode a JSON body.
    pub(crate) async fn request_json<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, query, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("{}: {}", path, e)))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request_json::<T, ()>(Method::GET, path, query, None).await
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(method = %method, url = %url, "API request");

        let mut request = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        debug!(method = %method, url = %url, status = status.as_u16(), "API response");

        if status.is_success() {
            return Ok(response);
        }

        let body = error_body(response.text().await, path);
        Err(map_status(status, &body, path))
    }
}

/// Body of an error response; an unreadable body maps to the status text.
fn error_body(body: reqwest::Result<String>, path: &str) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            debug!(path, error = %e, "Failed to read error body");
            String::new()
        }
    }
}

pub(crate) fn map_status(status: StatusCode, body: &str, path: &str) -> ApiError {
    let detail = error_detail(body);
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(
            detail.unwrap_or_else(|| "Could not validate credentials".to_string()),
        ),
        StatusCode::NOT_FOUND => {
            ApiError::NotFound(detail.unwrap_or_else(|| path.to_string()))
        }
        _ => ApiError::Server {
            status: status.as_u16(),
            message: detail.unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected status")
                    .to_string()
            }),
        },
    }
}

/// Error message from a response body: the `detail` field of a JSON error, else the raw text.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match value.get("detail") {
            Some(serde_json::Value::String(s)) => return Some(s.clone()),
            Some(other) => return Some(other.to_string()),
            None => {}
        }
    }
    Some(trimmed.to_string())
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Transport(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::Transport(format!("Connection error: {}", error))
    } else {
        ApiError::Transport(format!("HTTP error: {}", error))
    }
}
