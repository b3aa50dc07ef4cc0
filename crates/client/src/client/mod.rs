//! Main Nimble REST API client and API methods.
//!
//! This module provides the primary [`NimbleClient`] for the array
//! management API. It obtains a session token on first use and attaches it
//! to every later request.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Session token helpers (private module)
//! - `arrays`, `shelves`, `disks`: resource methods
//! - `health`: the full hardware health check
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Health rules (delegated to [`crate::health`])
//!
//! # Invariants
//! - At most one token request is issued per client; the token is never refreshed.
//! - Requests are issued one at a time, each awaited before the next starts.

pub mod builder;
mod session;

mod arrays;
mod disks;
mod health;
mod shelves;

use crate::auth::SessionManager;

/// Nimble REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use nimble_client::NimbleClient;
/// use secrecy::SecretString;
///
/// let mut client = NimbleClient::builder()
///     .base_url("https://array.example.com:5392".to_string())
///     .credentials("monitor".to_string(), SecretString::new("secret".to_string().into()))
///     .build()?;
/// let report = client.check_hardware_health().await?;
/// ```
#[derive(Debug)]
pub struct NimbleClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
}

impl NimbleClient {
    /// Create a new client builder.
    pub fn builder() -> builder::NimbleClientBuilder {
        builder::NimbleClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
