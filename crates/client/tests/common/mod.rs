//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

#[allow(unused_imports)]
pub use nimble_client::testing::load_fixture;

#[allow(unused_imports)]
pub use nimble_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use nimble_client::NimbleClient;
use secrecy::SecretString;
use wiremock::matchers::{header, method, path};

/// Session token served by `auth/token_success.json`.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "b1c3bd9c1f0d8c3e5a7f2d4e6b8a0c1d";

/// Build a client for `server` with test credentials.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> NimbleClient {
    NimbleClient::builder()
        .base_url(server.uri())
        .credentials(
            "monitor".to_string(),
            SecretString::new("secret".to_string().into()),
        )
        .build()
        .expect("client should build")
}

/// Mount the token endpoint returning the success fixture.
#[allow(dead_code)]
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/tokens"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("auth/token_success.json")),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Mount an authenticated GET endpoint returning `body`.
#[allow(dead_code)]
pub async fn mount_get(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("X-Auth-Token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
