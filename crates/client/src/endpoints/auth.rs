//! Authentication endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{parse_json, send_request};
use crate::error::Result;
use crate::models::{DataEnvelope, SessionTokenData, TokenRequest, require};

/// Exchange username and password for a session token.
pub async fn login(client: &Client, base_url: &str, username: &str, password: &str) -> Result<String> {
    debug!("Requesting session token as {}", username);

    let url = format!("{}/v1/tokens", base_url);
    let builder = client
        .post(&url)
        .json(&TokenRequest::new(username, password));
    let response = send_request(builder).await?;

    let resp: DataEnvelope<SessionTokenData> = parse_json(response, "token response").await?;

    require(resp.data.session_token.as_deref(), || {
        "data.session_token".to_string()
    })
    .map(str::to_string)
}
