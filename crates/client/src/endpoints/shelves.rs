//! Shelf endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{AUTH_TOKEN_HEADER, parse_json, send_request};
use crate::error::Result;
use crate::models::{Collection, DataEnvelope, ShelfDetail, ShelfSummary};

/// List shelves with the row bounds used to iterate them.
pub async fn list_shelves(
    client: &Client,
    base_url: &str,
    auth_token: &str,
) -> Result<Collection<ShelfSummary>> {
    let url = format!("{}/v1/shelves", base_url);
    debug!("Listing shelves");

    let builder = client.get(&url).header(AUTH_TOKEN_HEADER, auth_token);
    let response = send_request(builder).await?;

    parse_json(response, "shelf list").await
}

/// Get hardware status records for all shelves.
pub async fn get_shelf_details(
    client: &Client,
    base_url: &str,
    auth_token: &str,
) -> Result<Vec<ShelfDetail>> {
    let url = format!("{}/v1/shelves/detail", base_url);
    debug!("Fetching shelf detail");

    let builder = client.get(&url).header(AUTH_TOKEN_HEADER, auth_token);
    let response = send_request(builder).await?;

    let resp: DataEnvelope<Vec<ShelfDetail>> = parse_json(response, "shelf detail").await?;
    Ok(resp.data)
}
