//! Hardware health check operation.
//!
//! Runs the fetches in a fixed order (token, array, shelf list, shelf
//! detail, disk detail) and evaluates the records with [`crate::health`].
//! Any failure aborts the check and is tagged with the stage it hit; faults
//! reported by the hardware never abort, they become findings.

use tracing::info;

use crate::client::NimbleClient;
use crate::error::{HealthCheckError, HealthStage};
use crate::health::{HealthReport, observe_disks, observe_shelves};

impl NimbleClient {
    /// Perform the full hardware health check.
    ///
    /// The shelf detail resource is fetched once and indexed by the row
    /// bounds reported by the shelf listing.
    ///
    /// # Errors
    ///
    /// Returns a [`HealthCheckError`] naming the stage that failed. A failure
    /// at [`HealthStage::Authentication`] means no other request was sent.
    pub async fn check_hardware_health(&mut self) -> Result<HealthReport, HealthCheckError> {
        self.login()
            .await
            .map_err(HealthCheckError::at(HealthStage::Authentication))?;

        let array = self
            .get_array_info()
            .await
            .map_err(HealthCheckError::at(HealthStage::ArrayInfo))?;
        info!(array = %array.full_name, serial = %array.serial, "Checking array hardware");

        let listing = self
            .list_shelves()
            .await
            .map_err(HealthCheckError::at(HealthStage::Shelves))?;
        let details = self
            .get_shelf_details()
            .await
            .map_err(HealthCheckError::at(HealthStage::Shelves))?;
        let shelves = observe_shelves(&listing, &details)
            .map_err(HealthCheckError::at(HealthStage::Shelves))?;

        let disk_collection = self
            .get_disk_details()
            .await
            .map_err(HealthCheckError::at(HealthStage::Disks))?;
        let disks =
            observe_disks(&disk_collection).map_err(HealthCheckError::at(HealthStage::Disks))?;

        let report = HealthReport::new(array, shelves, disks);
        info!(
            severity = %report.verdict.severity(),
            shelves = report.shelf_count(),
            disks = report.disk_count(),
            "Hardware health evaluated"
        );

        Ok(report)
    }
}
