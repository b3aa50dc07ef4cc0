//! Disk endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{AUTH_TOKEN_HEADER, parse_json, send_request};
use crate::error::Result;
use crate::models::{Collection, Disk};

/// Get status records for every disk slot in the array.
pub async fn get_disk_details(
    client: &Client,
    base_url: &str,
    auth_token: &str,
) -> Result<Collection<Disk>> {
    let url = format!("{}/v1/disks/detail", base_url);
    debug!("Fetching disk detail");

    let builder = client.get(&url).header(AUTH_TOKEN_HEADER, auth_token);
    let response = send_request(builder).await?;

    parse_json(response, "disk detail").await
}
