//! Error types for the Nimble client.

use std::fmt;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Nimble client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from the array.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body could not be parsed into the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A required field was absent from an otherwise valid response.
    #[error("Missing field in response: {0}")]
    MissingField(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error happened below HTTP: connection refused, DNS,
    /// TLS handshake or timeout.
    pub fn is_transport_error(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_) | Self::ApiError { status: 401 | 403, .. }
        )
    }
}

/// Step of the hardware health check that was running when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStage {
    Authentication,
    ArrayInfo,
    Shelves,
    Disks,
}

impl fmt::Display for HealthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication => write!(f, "session token"),
            Self::ArrayInfo => write!(f, "array information"),
            Self::Shelves => write!(f, "shelf status"),
            Self::Disks => write!(f, "disk status"),
        }
    }
}

/// A [`ClientError`] tagged with the health check stage it interrupted.
#[derive(Error, Debug)]
#[error("{stage}: {source}")]
pub struct HealthCheckError {
    pub stage: HealthStage,
    #[source]
    pub source: ClientError,
}

impl HealthCheckError {
    /// Returns a closure that tags a [`ClientError`] with `stage`, for use with `map_err`.
    pub fn at(stage: HealthStage) -> impl FnOnce(ClientError) -> Self {
        move |source| Self { stage, source }
    }
}
