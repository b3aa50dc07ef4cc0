//! Nimble Storage REST API client.
//!
//! This crate provides a type-safe client for the array management API
//! (`/v1`) and the hardware health evaluation built on top of it: shelf
//! power, fan, temperature and controller checks plus per-disk state checks,
//! folded into a single [`Verdict`].

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod health;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::SessionManager;
pub use client::NimbleClient;
pub use client::builder::NimbleClientBuilder;
pub use error::{ClientError, HealthCheckError, HealthStage, Result};
pub use health::{DiskObservation, Finding, HealthReport, Severity, ShelfObservation, Verdict};
pub use models::{ArrayInfo, Collection, Disk, ShelfDetail, ShelfSummary};
