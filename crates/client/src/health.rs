//! Hardware health evaluation.
//!
//! Responsibilities:
//! - Define the ordered [`Severity`] scale and the [`Verdict`] accumulator.
//! - Turn shelf and disk records into observations and observations into [`Finding`]s.
//! - Assemble a [`HealthReport`] in evaluation order.
//!
//! Does NOT handle:
//! - Fetching records (see `client::health`).
//! - Rendering the monitoring line or verbose dump (see the cli crate).
//!
//! Invariants:
//! - A verdict's severity never decreases as findings are folded in.
//! - Fragments are appended in evaluation order: per shelf PSU, fan,
//!   temperature, controller A, controller B; then one per faulty disk.
//! - Status comparisons are exact and case-sensitive.

use std::fmt;

use crate::error::{ClientError, Result};
use crate::models::{ArrayInfo, Collection, Disk, ShelfDetail, ShelfSummary};

/// Message used when no check produced a fragment.
pub const NO_ISSUES_TEXT: &str = "No Hardware Issues Present";

pub const PSU_FAULT: &str = "PSU or Supply Fault!";
pub const FAN_FAULT: &str = "Fan Fault!";
pub const TEMPERATURE_FAULT: &str = "Temperature Fault!";
pub const CONTROLLER_A_FAULT: &str = "Controller A Fault!";
pub const CONTROLLER_B_FAULT: &str = "Controller B Fault!";
pub const DISK_FAULT: &str = "Disk Fault!";

/// Healthy value of the shelf PSU, fan and temperature summaries.
const STATUS_OK: &str = "OK";
/// Healthy controller hardware state.
const CONTROLLER_READY: &str = "ready";
/// Healthy disk operational state.
const DISK_IN_USE: &str = "in use";

/// Health classification, ordered from best to worst.
///
/// The numeric code is the process exit code expected by the monitoring
/// framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Ok = 0,
    Warning = 1,
    Critical = 2,
}

impl Severity {
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }

    /// The worse of two severities.
    pub fn combine(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The outcome of one failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub fragment: &'static str,
}

impl Finding {
    pub const fn critical(fragment: &'static str) -> Self {
        Self {
            severity: Severity::Critical,
            fragment,
        }
    }
}

/// Running result of the health check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    severity: Severity,
    fragments: Vec<&'static str>,
}

impl Verdict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finding into the verdict.
    pub fn record(&mut self, finding: Finding) {
        self.severity = self.severity.combine(finding.severity);
        self.fragments.push(finding.fragment);
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn fragments(&self) -> &[&'static str] {
        &self.fragments
    }

    /// Message text: each fragment followed by a space, or [`NO_ISSUES_TEXT`]
    /// when the verdict is OK.
    pub fn message(&self) -> String {
        if self.severity == Severity::Ok {
            return NO_ISSUES_TEXT.to_string();
        }
        self.fragments.iter().map(|f| format!("{f} ")).collect()
    }
}

impl Extend<Finding> for Verdict {
    fn extend<I: IntoIterator<Item = Finding>>(&mut self, iter: I) {
        for finding in iter {
            self.record(finding);
        }
    }
}

impl FromIterator<Finding> for Verdict {
    fn from_iter<I: IntoIterator<Item = Finding>>(iter: I) -> Self {
        let mut verdict = Self::new();
        verdict.extend(iter);
        verdict
    }
}

fn expect_state(actual: &str, healthy: &str, fragment: &'static str) -> Option<Finding> {
    (actual != healthy).then(|| Finding::critical(fragment))
}

/// Status values read for one shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfObservation {
    pub id: Option<String>,
    pub model: Option<String>,
    pub shelf_type: Option<String>,
    pub psu_status: String,
    pub fan_status: String,
    pub temp_status: String,
    pub controller_a_state: String,
    pub controller_b_state: String,
}

impl ShelfObservation {
    /// Read the status fields of the shelf at `row`. The summary only
    /// contributes the shelf id.
    pub fn from_records(
        row: usize,
        summary: Option<&ShelfSummary>,
        detail: &ShelfDetail,
    ) -> Result<Self> {
        Ok(Self {
            id: summary.and_then(|s| s.id.clone()),
            model: detail.model_ext.clone(),
            shelf_type: detail.shelf_type().map(str::to_string),
            psu_status: detail.psu_status(row)?.to_string(),
            fan_status: detail.fan_status(row)?.to_string(),
            temp_status: detail.temp_status(row)?.to_string(),
            controller_a_state: detail.controller_state(row, 0)?.to_string(),
            controller_b_state: detail.controller_state(row, 1)?.to_string(),
        })
    }

    /// All failed checks for this shelf, in check order.
    pub fn findings(&self) -> Vec<Finding> {
        [
            expect_state(&self.psu_status, STATUS_OK, PSU_FAULT),
            expect_state(&self.fan_status, STATUS_OK, FAN_FAULT),
            expect_state(&self.temp_status, STATUS_OK, TEMPERATURE_FAULT),
            expect_state(&self.controller_a_state, CONTROLLER_READY, CONTROLLER_A_FAULT),
            expect_state(&self.controller_b_state, CONTROLLER_READY, CONTROLLER_B_FAULT),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Status values read for one disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskObservation {
    pub id: Option<String>,
    pub disk_type: Option<String>,
    pub state: String,
    pub raid_state: Option<String>,
}

impl DiskObservation {
    pub fn from_record(row: usize, disk: &Disk) -> Result<Self> {
        Ok(Self {
            id: disk.id.clone(),
            disk_type: disk.disk_type.clone(),
            state: disk.state_at(row)?.to_string(),
            raid_state: disk.raid_state.clone(),
        })
    }

    /// RAID state and type never affect the result.
    pub fn finding(&self) -> Option<Finding> {
        expect_state(&self.state, DISK_IN_USE, DISK_FAULT)
    }
}

/// Observe every shelf in the listing's row range.
///
/// The listing supplies the bounds and ids; `details` supplies the status
/// record for each row index.
pub fn observe_shelves(
    listing: &Collection<ShelfSummary>,
    details: &[ShelfDetail],
) -> Result<Vec<ShelfObservation>> {
    listing
        .row_range()?
        .map(|row| {
            let detail = details
                .get(row)
                .ok_or_else(|| ClientError::MissingField(format!("shelves/detail data[{row}]")))?;
            ShelfObservation::from_records(row, listing.data.get(row), detail)
        })
        .collect()
}

/// Observe every disk in the collection's row range.
pub fn observe_disks(disks: &Collection<Disk>) -> Result<Vec<DiskObservation>> {
    disks
        .row_range()?
        .map(|row| DiskObservation::from_record(row, disks.row(row)?))
        .collect()
}

/// Everything one health check run learned about the array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub array: ArrayInfo,
    pub shelves: Vec<ShelfObservation>,
    pub disks: Vec<DiskObservation>,
    pub verdict: Verdict,
}

impl HealthReport {
    /// Build a report, evaluating shelves before disks.
    pub fn new(
        array: ArrayInfo,
        shelves: Vec<ShelfObservation>,
        disks: Vec<DiskObservation>,
    ) -> Self {
        let verdict = shelves
            .iter()
            .flat_map(ShelfObservation::findings)
            .chain(disks.iter().filter_map(DiskObservation::finding))
            .collect();

        Self {
            array,
            shelves,
            disks,
            verdict,
        }
    }

    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    pub fn disk_count(&self) -> usize {
        self.disks.len()
    }
}
