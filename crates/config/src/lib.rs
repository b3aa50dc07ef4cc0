//! Configuration management for the Nimble health probe.
//!
//! This crate provides types and a layered loader for the array connection
//! settings: `.env` file, environment variables, then explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, Credentials};
