//! Array information endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{AUTH_TOKEN_HEADER, parse_json, send_request};
use crate::error::Result;
use crate::models::{ArrayInfo, DataEnvelope, require};

/// Get the identity of the array (first entry of `/v1/arrays/detail`).
pub async fn get_array_info(client: &Client, base_url: &str, auth_token: &str) -> Result<ArrayInfo> {
    let url = format!("{}/v1/arrays/detail", base_url);
    debug!("Fetching array information");

    let builder = client.get(&url).header(AUTH_TOKEN_HEADER, auth_token);
    let response = send_request(builder).await?;

    let resp: DataEnvelope<Vec<ArrayInfo>> = parse_json(response, "array detail").await?;

    require(resp.data.first(), || "data[0]".to_string()).cloned()
}
