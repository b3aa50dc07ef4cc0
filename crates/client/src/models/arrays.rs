//! Array identity model for the `/v1/arrays/detail` API.

use serde::Deserialize;

/// Array-level identity used in the summary line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArrayInfo {
    pub full_name: String,
    pub serial: String,
    pub version: String,
}
