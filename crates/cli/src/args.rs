//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the probe's flags using clap derive macros.
//! - Read flag fallbacks from `NIMBLE_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not validate values beyond their type (see `nimble_config::ConfigLoader::build`).

use clap::Parser;
use nimble_config::constants::{
    ENV_ENDPOINT_URL, ENV_PASSWORD, ENV_TIMEOUT, ENV_USERNAME, ENV_VERIFY_TLS,
};

#[derive(Parser, Debug)]
#[command(name = "nimble-health")]
#[command(
    about = "Check Nimble Storage array hardware health (shelves, controllers, disks)",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Exit codes:\n  0  OK\n  1  WARNING\n  2  CRITICAL\n\nExample:\n  nimble-health -e https://array.example.com:5392 -u monitor -p secret\n"
)]
pub struct Cli {
    /// Endpoint URL of the array management API (e.g., https://array.example.com:5392)
    #[arg(short = 'e', long = "endpointurl", env = ENV_ENDPOINT_URL)]
    pub endpoint_url: String,

    /// API username
    #[arg(short, long, env = ENV_USERNAME)]
    pub username: String,

    /// API password
    #[arg(short, long, env = ENV_PASSWORD, hide_env_values = true)]
    pub password: String,

    /// Print every status value read from the array and the return code
    #[arg(short = 'd', long = "debugmode")]
    pub debug_mode: bool,

    /// Request timeout in seconds
    #[arg(long, env = ENV_TIMEOUT)]
    pub timeout: Option<u64>,

    /// Validate the array's TLS certificate (arrays ship self-signed certificates)
    #[arg(long, env = ENV_VERIFY_TLS)]
    pub verify_tls: bool,
}
