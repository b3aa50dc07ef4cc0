//! Shelf models for the `/v1/shelves` and `/v1/shelves/detail` APIs.
//!
//! The listing returns one [`ShelfSummary`] per enclosure and the row bounds
//! used to iterate; the detail endpoint returns the hardware status records,
//! addressed by the same row index.

use serde::Deserialize;

use crate::error::Result;
use crate::models::common::require;

/// Shelf entry from `/v1/shelves`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShelfSummary {
    #[serde(default)]
    pub id: Option<String>,
}

/// Shelf hardware status from `/v1/shelves/detail`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShelfDetail {
    #[serde(default)]
    pub model_ext: Option<String>,
    #[serde(default)]
    pub psu_overall_status: Option<String>,
    #[serde(default)]
    pub fan_overall_status: Option<String>,
    #[serde(default)]
    pub temp_overall_status: Option<String>,
    #[serde(default)]
    pub ctrlrs: Vec<ControllerInfo>,
}

/// One controller slot of a shelf.
#[derive(Debug, Clone, Deserialize)]
pub struct ControllerInfo {
    #[serde(default)]
    pub ctrlr_attrset_list: Vec<ControllerAttributes>,
}

/// Controller attribute set; only the first set of each controller is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ControllerAttributes {
    #[serde(default)]
    pub sw_type: Option<String>,
    #[serde(default)]
    pub hw_state: Option<String>,
}

impl ShelfDetail {
    pub fn psu_status(&self, row: usize) -> Result<&str> {
        require(self.psu_overall_status.as_deref(), || {
            format!("data[{row}].psu_overall_status")
        })
    }

    pub fn fan_status(&self, row: usize) -> Result<&str> {
        require(self.fan_overall_status.as_deref(), || {
            format!("data[{row}].fan_overall_status")
        })
    }

    pub fn temp_status(&self, row: usize) -> Result<&str> {
        require(self.temp_overall_status.as_deref(), || {
            format!("data[{row}].temp_overall_status")
        })
    }

    /// Hardware state of controller `slot` (0 = A, 1 = B).
    pub fn controller_state(&self, row: usize, slot: usize) -> Result<&str> {
        let attrs = self.controller_attributes(row, slot)?;
        require(attrs.hw_state.as_deref(), || {
            format!("data[{row}].ctrlrs[{slot}].ctrlr_attrset_list[0].hw_state")
        })
    }

    /// Software type reported by controller A, if present.
    pub fn shelf_type(&self) -> Option<&str> {
        self.ctrlrs
            .first()
            .and_then(|c| c.ctrlr_attrset_list.first())
            .and_then(|a| a.sw_type.as_deref())
    }

    fn controller_attributes(&self, row: usize, slot: usize) -> Result<&ControllerAttributes> {
        let controller = require(self.ctrlrs.get(slot), || {
            format!("data[{row}].ctrlrs[{slot}]")
        })?;
        require(controller.ctrlr_attrset_list.first(), || {
            format!("data[{row}].ctrlrs[{slot}].ctrlr_attrset_list[0]")
        })
    }
}
