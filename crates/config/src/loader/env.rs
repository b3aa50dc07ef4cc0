//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_ENDPOINT_URL, ENV_PASSWORD, ENV_TIMEOUT, ENV_USERNAME, ENV_VERIFY_TLS};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Only fields not already set on the loader are filled in.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.endpoint_url().is_none() {
        loader.set_endpoint_url(env_var_or_none(ENV_ENDPOINT_URL));
    }
    if loader.username().is_none() {
        loader.set_username(env_var_or_none(ENV_USERNAME));
    }
    if !loader.has_password()
        && let Some(password) = env_var_or_none(ENV_PASSWORD)
    {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if loader.timeout().is_none()
        && let Some(timeout) = env_var_or_none(ENV_TIMEOUT)
    {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if loader.verify_tls().is_none()
        && let Some(verify) = env_var_or_none(ENV_VERIFY_TLS)
    {
        loader.set_verify_tls(Some(verify.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_VERIFY_TLS.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }

    Ok(())
}
