//! Client builder for constructing [`NimbleClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # Invariants
//! - `base_url` and credentials are required before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - TLS certificate validation is off unless `verify_tls(true)` is set,
//!   because arrays ship with self-signed certificates

use secrecy::SecretString;
use std::time::Duration;

use crate::auth::SessionManager;
use crate::client::NimbleClient;
use crate::error::{ClientError, Result};
use nimble_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`NimbleClient`].
pub struct NimbleClientBuilder {
    base_url: Option<String>,
    credentials: Option<(String, SecretString)>,
    verify_tls: bool,
    timeout: Duration,
}

impl Default for NimbleClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            verify_tls: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl NimbleClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL of the array, including scheme and port,
    /// e.g. `https://array.example.com:5392`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API credentials exchanged for a session token.
    pub fn credentials(mut self, username: String, password: SecretString) -> Self {
        self.credentials = Some((username, password));
        self
    }

    /// Set whether to validate the array's TLS certificate.
    ///
    /// This only affects HTTPS connections.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.endpoint_url.clone());
        self.credentials = Some((
            config.credentials.username.clone(),
            config.credentials.password.clone(),
        ));
        self.verify_tls = config.connection.verify_tls;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`NimbleClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if credentials were not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<NimbleClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let (username, password) = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if !self.verify_tls && base_url.starts_with("https://") {
            tracing::warn!("TLS certificate validation is disabled for {}", base_url);
            http_builder = http_builder.danger_accept_invalid_certs(true);
        }

        let http = http_builder.build()?;

        Ok(NimbleClient {
            http,
            base_url,
            session_manager: SessionManager::new(username, password),
        })
    }
}
