//! Connection configuration types for the Nimble health probe.
//!
//! Responsibilities:
//! - Define connection settings (endpoint URL, TLS validation, timeout).
//! - Define API credentials with the password held as a secret.
//! - Combine both into the main `Config` structure.
//!
//! Does NOT handle:
//! - Configuration loading from env/CLI (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `endpoint_url` is validated and has no trailing slash once built by `ConfigLoader`.
//! - The password is never exposed through `Debug`.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Connection settings for the array management API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Endpoint URL including scheme and port (e.g., https://array.example.com:5392)
    pub endpoint_url: String,
    /// Whether to validate the array's TLS certificate.
    /// Arrays ship with self-signed certificates, so this defaults to false.
    pub verify_tls: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

/// API credentials exchanged for a session token.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub credentials: Credentials,
}

impl Config {
    /// Create a config for the given endpoint and credentials with default
    /// connection settings.
    pub fn new(endpoint_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                endpoint_url,
                verify_tls: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            credentials: Credentials { username, password },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = Config::new(
            "https://array:5392".to_string(),
            "monitor".to_string(),
            SecretString::new("pw".to_string().into()),
        );
        assert!(!config.connection.verify_tls);
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert_eq!(config.credentials.username, "monitor");
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = Config::new(
            "https://array:5392".to_string(),
            "monitor".to_string(),
            SecretString::new("hunter2".to_string().into()),
        );
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
    }
}
