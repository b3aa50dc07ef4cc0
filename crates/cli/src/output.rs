//! Monitoring output written to stdout.
//!
//! Responsibilities:
//! - Render the single monitoring line for a report or a failure.
//! - Render the verbose diagnostic dump enabled by `--debugmode`.
//!
//! Does NOT handle:
//! - Logging. Diagnostics for humans go through `tracing` to stderr.
//!
//! Invariants:
//! - Every line is flushed as soon as it is written.
//! - Verbose lines never appear unless verbose mode is on; the monitoring
//!   line always appears exactly once.

use std::fmt::Display;
use std::io::{self, Write};

use nimble_client::{HealthCheckError, HealthReport, HealthStage, Severity};
use nimble_config::ConfigError;

use crate::error::ExitCode;

/// Line printed when the array cannot be reached or rejects the credentials.
pub const CONNECT_FAILURE: &str =
    "Failed to connect! Check EndpointURL, username and password.";

const NOT_AVAILABLE: &str = "N/A";

/// The monitoring line for a completed check.
pub fn summary_line(report: &HealthReport) -> String {
    let severity = report.verdict.severity();
    format!(
        "{} - {} ({} {} with {} shelves and {} disks)",
        severity.label(),
        report.verdict.message(),
        report.array.full_name,
        report.array.serial,
        report.shelf_count(),
        report.disk_count()
    )
}

/// The monitoring line for a check that could not be completed.
pub fn failure_line(err: &HealthCheckError) -> String {
    match err.stage {
        HealthStage::Authentication => critical(CONNECT_FAILURE),
        stage => critical(format!("Failed to retrieve {}: {}", stage, err.source)),
    }
}

/// The monitoring line for unusable configuration.
pub fn config_failure_line(err: &ConfigError) -> String {
    critical(format!("Invalid configuration: {}", err))
}

fn critical(text: impl Display) -> String {
    format!("{} - {}", Severity::Critical.label(), text)
}

/// Writes monitoring output, one flushed line at a time.
pub struct Reporter<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    fn detail(&mut self, label: &str, value: Option<&str>) -> io::Result<()> {
        self.line(format_args!("{}: {}", label, value.unwrap_or(NOT_AVAILABLE)))
    }

    /// Print the verbose header before any request is made.
    pub fn banner(&mut self, endpoint_url: &str) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        self.line("DEBUG MODE")?;
        self.detail("Endpoint URL", Some(endpoint_url))
    }

    /// Print the verbose dump (when enabled) and the monitoring line.
    pub fn report(&mut self, report: &HealthReport) -> io::Result<Severity> {
        if self.verbose {
            self.detail("Array Name", Some(&report.array.full_name))?;
            self.detail("Array Serial", Some(&report.array.serial))?;
            self.detail("Array Version", Some(&report.array.version))?;

            for shelf in &report.shelves {
                self.detail("Shelf ID", shelf.id.as_deref())?;
                self.detail("Model", shelf.model.as_deref())?;
                self.detail("Shelf Type", shelf.shelf_type.as_deref())?;
                self.detail("PSU Status", Some(&shelf.psu_status))?;
                self.detail("Fan Status", Some(&shelf.fan_status))?;
                self.detail("Temperature Status", Some(&shelf.temp_status))?;
                self.detail("Controller A Status", Some(&shelf.controller_a_state))?;
                self.detail("Controller B Status", Some(&shelf.controller_b_state))?;
            }

            for disk in &report.disks {
                self.detail("Disk ID", disk.id.as_deref())?;
                self.detail("Disk Type", disk.disk_type.as_deref())?;
                self.detail("Disk State", Some(&disk.state))?;
                self.detail("Disk RAID State", disk.raid_state.as_deref())?;
            }
        }

        self.line(summary_line(report))?;
        Ok(report.verdict.severity())
    }

    /// Print a failure monitoring line. Failures are always critical.
    pub fn failure(&mut self, line: &str) -> io::Result<Severity> {
        self.line(line)?;
        Ok(Severity::Critical)
    }

    /// Print the verbose trailer.
    pub fn return_code(&mut self, code: ExitCode) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        self.line(format_args!("Return Code: {}", code.as_i32()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimble_client::health::{DISK_FAULT, NO_ISSUES_TEXT};
    use nimble_client::{ArrayInfo, ClientError, DiskObservation, ShelfObservation};

    fn shelf(psu: &str) -> ShelfObservation {
        ShelfObservation {
            id: Some("2c0f9a8b7d6e5f41".to_string()),
            model: Some("AF40-4F-11T".to_string()),
            shelf_type: None,
            psu_status: psu.to_string(),
            fan_status: "OK".to_string(),
            temp_status: "OK".to_string(),
            controller_a_state: "ready".to_string(),
            controller_b_state: "ready".to_string(),
        }
    }

    fn disk(state: &str) -> DiskObservation {
        DiskObservation {
            id: Some("2d00000000000000".to_string()),
            disk_type: Some("ssd".to_string()),
            state: state.to_string(),
            raid_state: Some("okay".to_string()),
        }
    }

    fn report(shelves: Vec<ShelfObservation>, disks: Vec<DiskObservation>) -> HealthReport {
        HealthReport::new(
            ArrayInfo {
                full_name: "ArrayName".to_string(),
                serial: "SN123".to_string(),
                version: "6.1.2.300".to_string(),
            },
            shelves,
            disks,
        )
    }

    fn rendered(verbose: bool, f: impl FnOnce(&mut Reporter<&mut Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(&mut buf, verbose);
        f(&mut reporter);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_line_healthy() {
        let report = report(vec![shelf("OK"), shelf("OK")], vec![disk("in use")]);
        assert_eq!(
            summary_line(&report),
            format!("OK - {} (ArrayName SN123 with 2 shelves and 1 disks)", NO_ISSUES_TEXT)
        );
    }

    #[test]
    fn test_summary_line_keeps_trailing_fragment_space() {
        let report = report(vec![shelf("Degraded"), shelf("OK")], vec![disk("in use")]);
        assert_eq!(
            summary_line(&report),
            "CRITICAL - PSU or Supply Fault!  (ArrayName SN123 with 2 shelves and 1 disks)"
        );
    }

    #[test]
    fn test_summary_line_empty_array() {
        let report = report(vec![], vec![]);
        assert_eq!(
            summary_line(&report),
            "OK - No Hardware Issues Present (ArrayName SN123 with 0 shelves and 0 disks)"
        );
    }

    #[test]
    fn test_failure_line_for_auth_is_fixed() {
        let err = HealthCheckError::at(HealthStage::Authentication)(ClientError::ApiError {
            status: 401,
            url: "https://array:5392/v1/tokens".to_string(),
            message: "Unauthorized access.".to_string(),
        });
        assert_eq!(
            failure_line(&err),
            "CRITICAL - Failed to connect! Check EndpointURL, username and password."
        );
    }

    #[test]
    fn test_failure_line_names_stage() {
        let err = HealthCheckError::at(HealthStage::Disks)(ClientError::MissingField(
            "data[3].state".to_string(),
        ));
        assert_eq!(
            failure_line(&err),
            "CRITICAL - Failed to retrieve disk status: Missing field in response: data[3].state"
        );
    }

    #[test]
    fn test_config_failure_line() {
        assert_eq!(
            config_failure_line(&ConfigError::MissingCredentials),
            format!("CRITICAL - Invalid configuration: {}", ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn test_quiet_report_prints_only_monitoring_line() {
        let report = report(vec![shelf("OK")], vec![disk("failed")]);
        let out = rendered(false, |r| {
            r.banner("https://array:5392").unwrap();
            assert_eq!(r.report(&report).unwrap(), Severity::Critical);
            r.return_code(ExitCode::Critical).unwrap();
        });

        assert_eq!(
            out,
            format!("CRITICAL - {DISK_FAULT}  (ArrayName SN123 with 1 shelves and 1 disks)\n")
        );
    }

    #[test]
    fn test_verbose_report_dumps_every_value() {
        let report = report(vec![shelf("OK")], vec![disk("in use")]);
        let out = rendered(true, |r| {
            r.banner("https://array:5392").unwrap();
            r.report(&report).unwrap();
            r.return_code(ExitCode::Ok).unwrap();
        });

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "DEBUG MODE",
                "Endpoint URL: https://array:5392",
                "Array Name: ArrayName",
                "Array Serial: SN123",
                "Array Version: 6.1.2.300",
                "Shelf ID: 2c0f9a8b7d6e5f41",
                "Model: AF40-4F-11T",
                "Shelf Type: N/A",
                "PSU Status: OK",
                "Fan Status: OK",
                "Temperature Status: OK",
                "Controller A Status: ready",
                "Controller B Status: ready",
                "Disk ID: 2d00000000000000",
                "Disk Type: ssd",
                "Disk State: in use",
                "Disk RAID State: okay",
                "OK - No Hardware Issues Present (ArrayName SN123 with 1 shelves and 1 disks)",
                "Return Code: 0",
            ]
        );
    }

    #[test]
    fn test_failure_is_critical() {
        let out = rendered(true, |r| {
            assert_eq!(r.failure("CRITICAL - boom").unwrap(), Severity::Critical);
        });
        assert_eq!(out, "CRITICAL - boom\n");
    }
}
