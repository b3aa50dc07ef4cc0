//! nimble-health - hardware health probe for Nimble Storage arrays.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run the hardware health check via the shared client library.
//! - Print the monitoring line and exit with the matching code.
//!
//! Does NOT handle:
//! - REST API implementation or health rules (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - stdout carries only monitoring output; logs go to stderr.

mod args;
mod error;
mod output;

use std::io::{self, Stdout};

use anyhow::Context;
use args::Cli;
use clap::Parser;
use error::ExitCode;
use nimble_client::{HealthCheckError, HealthStage, NimbleClient, Severity};
use nimble_config::{Config, ConfigError, ConfigLoader};
use output::Reporter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::Critical
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run() -> anyhow::Result<ExitCode> {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        let severity = Reporter::new(io::stdout(), false)
            .failure(&output::config_failure_line(&e))
            .context("Failed to write monitoring output")?;
        return Ok(severity.into());
    }

    let cli = Cli::parse();
    init_tracing(cli.debug_mode);

    let mut reporter = Reporter::new(io::stdout(), cli.debug_mode);
    reporter
        .banner(&cli.endpoint_url)
        .context("Failed to write monitoring output")?;

    let severity = match build_config(&cli) {
        Ok(config) => check(&config, &mut reporter).await?,
        Err(e) => {
            tracing::debug!(error = %e, "Configuration rejected");
            reporter
                .failure(&output::config_failure_line(&e))
                .context("Failed to write monitoring output")?
        }
    };

    let exit_code = ExitCode::from(severity);
    reporter
        .return_code(exit_code)
        .context("Failed to write monitoring output")?;

    Ok(exit_code)
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the default level.
fn init_tracing(debug_mode: bool) {
    let default_level = if debug_mode { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Layer CLI values over environment variables and defaults.
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new()
        .with_endpoint_url(cli.endpoint_url.clone())
        .with_username(cli.username.clone())
        .with_password(cli.password.clone());

    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.verify_tls {
        loader = loader.with_verify_tls(true);
    }

    loader.from_env()?.build()
}

async fn check(config: &Config, reporter: &mut Reporter<Stdout>) -> anyhow::Result<Severity> {
    let result = match NimbleClient::builder().from_config(config).build() {
        Ok(mut client) => client.check_hardware_health().await,
        Err(e) => Err(HealthCheckError::at(HealthStage::Authentication)(e)),
    };

    let written = match result {
        Ok(report) => reporter.report(&report),
        Err(e) => {
            tracing::error!(error = %e, "Hardware health check failed");
            reporter.failure(&output::failure_line(&e))
        }
    };

    written.context("Failed to write monitoring output")
}
