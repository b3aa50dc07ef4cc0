//! Data models for Nimble API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod arrays;
pub mod auth;
pub mod common;
pub mod disks;
pub mod shelves;

pub use arrays::ArrayInfo;
pub use auth::{SessionTokenData, TokenRequest};
pub use common::{ApiMessage, ApiMessages, Collection, DataEnvelope, require};
pub use disks::Disk;
pub use shelves::{ControllerAttributes, ControllerInfo, ShelfDetail, ShelfSummary};
