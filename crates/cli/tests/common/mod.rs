//! Shared test utilities for nimble-health integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount a mock array serving the client crate's JSON fixtures.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - The mock array accepts any credentials and issues `TEST_TOKEN`.

use assert_cmd::Command;
use nimble_client::testing::load_fixture;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session token served by `auth/token_success.json`.
pub const TEST_TOKEN: &str = "b1c3bd9c1f0d8c3e5a7f2d4e6b8a0c1d";

/// Line printed for every authentication-stage failure.
#[allow(dead_code)]
pub const CONNECT_FAILURE_LINE: &str =
    "CRITICAL - Failed to connect! Check EndpointURL, username and password.\n";

/// Returns a hermetic `nimble-health` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `NIMBLE_*` variables are cleared to ensure no leakage from the host.
/// - Credentials are set so only the endpoint URL remains to be supplied.
pub fn nimble_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("nimble-health");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("NIMBLE_ENDPOINT_URL")
        .env_remove("NIMBLE_USERNAME")
        .env_remove("NIMBLE_PASSWORD")
        .env_remove("NIMBLE_TIMEOUT")
        .env_remove("NIMBLE_VERIFY_TLS")
        .env_remove("RUST_LOG");

    cmd.env("NIMBLE_USERNAME", "monitor");
    cmd.env("NIMBLE_PASSWORD", "secret");

    cmd
}

/// Returns a hermetic `nimble-health` command pointed at `endpoint_url`.
#[allow(dead_code)]
pub fn nimble_cmd_for(endpoint_url: &str) -> Command {
    let mut cmd = nimble_cmd();
    cmd.args(["-e", endpoint_url]);
    cmd
}

/// Mount the token endpoint returning the success fixture.
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/tokens"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("auth/token_success.json")),
        )
        .mount(server)
        .await;
}

/// Mount an authenticated GET endpoint returning the fixture at `fixture`.
pub async fn mount_fixture(server: &MockServer, route: &str, fixture: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("X-Auth-Token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .mount(server)
        .await;
}

/// Start a mock array with two shelves and 24 disks.
#[allow(dead_code)]
pub async fn mock_array(shelf_detail: &str, disk_detail: &str) -> MockServer {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_fixture(&server, "/v1/arrays/detail", "arrays/detail.json").await;
    mount_fixture(&server, "/v1/shelves", "shelves/list.json").await;
    mount_fixture(&server, "/v1/shelves/detail", shelf_detail).await;
    mount_fixture(&server, "/v1/disks/detail", disk_detail).await;
    server
}
