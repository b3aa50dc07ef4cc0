//! Common types shared across Nimble API models.
//!
//! This module contains the response envelopes used by every `/v1`
//! resource and the typed field-extraction helper. It does NOT contain
//! resource-specific models.

use serde::Deserialize;
use std::ops::Range;

use crate::error::{ClientError, Result};

/// Extract a required field, failing with [`ClientError::MissingField`].
///
/// `path` is the JSON path of the field in the response (e.g. `data[0].serial`)
/// and is only rendered when the field is absent.
pub fn require<'a, T: ?Sized>(value: Option<&'a T>, path: impl FnOnce() -> String) -> Result<&'a T> {
    value.ok_or_else(|| ClientError::MissingField(path()))
}

/// Single-object or list response: `{"data": ...}`.
#[derive(Debug, Deserialize, Clone)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Row-bounded collection: `{"startRow": n, "endRow": m, "data": [...]}`.
///
/// The array reports the rows it returned as the half-open range
/// `startRow..endRow`; records are addressed by that row index.
#[derive(Debug, Deserialize, Clone)]
pub struct Collection<T> {
    #[serde(rename = "startRow")]
    pub start_row: Option<usize>,
    #[serde(rename = "endRow")]
    pub end_row: Option<usize>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Collection<T> {
    /// The reported row range. Empty when `endRow <= startRow`.
    pub fn row_range(&self) -> Result<Range<usize>> {
        let start = *require(self.start_row.as_ref(), || "startRow".to_string())?;
        let end = *require(self.end_row.as_ref(), || "endRow".to_string())?;
        Ok(start..end.max(start))
    }

    /// The record at row `index`.
    pub fn row(&self, index: usize) -> Result<&T> {
        require(self.data.get(index), || format!("data[{index}]"))
    }
}

/// Error envelope returned with non-2xx responses.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiMessages {
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
}

/// One entry of an [`ApiMessages`] envelope.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl ApiMessages {
    /// Join all message texts into one display string, or `None` when empty.
    pub fn summary(&self) -> Option<String> {
        if self.messages.is_empty() {
            return None;
        }
        Some(
            self.messages
                .iter()
                .map(|m| match &m.code {
                    Some(code) => format!("{}: {}", code, m.text),
                    None => m.text.clone(),
                })
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
