//! Centralized constants for the Nimble health workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Nimble management API port.
pub const DEFAULT_API_PORT: u16 = 5392;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

/// Endpoint URL of the array management API.
pub const ENV_ENDPOINT_URL: &str = "NIMBLE_ENDPOINT_URL";

/// API username.
pub const ENV_USERNAME: &str = "NIMBLE_USERNAME";

/// API password.
pub const ENV_PASSWORD: &str = "NIMBLE_PASSWORD";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "NIMBLE_TIMEOUT";

/// Enables TLS certificate validation when set to true.
pub const ENV_VERIFY_TLS: &str = "NIMBLE_VERIFY_TLS";

/// Disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
