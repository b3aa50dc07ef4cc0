//! Disk models for the `/v1/disks/detail` API.

use serde::Deserialize;

use crate::error::Result;
use crate::models::common::require;

/// One physical disk slot.
///
/// `state` drives the health verdict; `type` and `raid_state` are
/// informational only.
#[derive(Debug, Clone, Deserialize)]
pub struct Disk {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub disk_type: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub raid_state: Option<String>,
}

impl Disk {
    /// Operational state of the disk at row `row` (e.g. `in use`).
    pub fn state_at(&self, row: usize) -> Result<&str> {
        require(self.state.as_deref(), || format!("data[{row}].state"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_deserialize_disk() {
        let json = r#"{"id": "2c0f9a", "type": "hdd", "state": "in use", "raid_state": "okay"}"#;
        let disk: Disk = serde_json::from_str(json).unwrap();
        assert_eq!(disk.disk_type.as_deref(), Some("hdd"));
        assert_eq!(disk.state_at(0).unwrap(), "in use");
    }

    #[test]
    fn test_missing_state_is_reported_with_row() {
        let disk: Disk = serde_json::from_str(r#"{"id": "2c0f9a"}"#).unwrap();
        let err = disk.state_at(7).unwrap_err();
        assert!(matches!(err, ClientError::MissingField(ref f) if f == "data[7].state"));
    }
}
