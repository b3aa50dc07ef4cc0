//! Request execution and response decoding shared by all endpoints.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiMessages;

/// Header carrying the session token on every authenticated request.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Sends an HTTP request once and converts non-2xx responses into
/// [`ClientError::ApiError`].
///
/// The error message is taken from the array's `messages` envelope when the
/// body has one, otherwise the raw body is used.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = serde_json::from_str::<ApiMessages>(&body)
        .ok()
        .and_then(|m| m.summary())
        .unwrap_or(body);

    debug!(status, %url, "Request failed");

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}

/// Decode a JSON response body into `T`.
///
/// `what` names the resource in the error message.
pub async fn parse_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}
