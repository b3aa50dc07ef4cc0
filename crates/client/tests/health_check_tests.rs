//! End-to-end tests of `NimbleClient::check_hardware_health` against a mock array.
//!
//! # Invariants
//! - Shelf detail is fetched once regardless of the shelf count
//! - Fragments appear in evaluation order, shelves before disks
//! - A failed token request stops the check before any other request

mod common;

use common::*;
use nimble_client::{HealthStage, Severity};
use nimble_client::health::{DISK_FAULT, NO_ISSUES_TEXT, PSU_FAULT};
use wiremock::matchers::{header, method, path};

async fn mount_array(server: &MockServer, shelf_detail: &str, disks: &str) {
    mount_token(server).await;
    mount_get(server, "/v1/arrays/detail", load_fixture("arrays/detail.json")).await;
    mount_get(server, "/v1/shelves", load_fixture("shelves/list.json")).await;

    Mock::given(method("GET"))
        .and(path("/v1/shelves/detail"))
        .and(header("X-Auth-Token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(shelf_detail)))
        .expect(1)
        .mount(server)
        .await;

    mount_get(server, "/v1/disks/detail", load_fixture(disks)).await;
}

#[tokio::test]
async fn test_healthy_array() {
    let server = MockServer::start().await;
    mount_array(&server, "shelves/detail_healthy.json", "disks/detail_healthy.json").await;

    let report = test_client(&server).check_hardware_health().await.unwrap();

    assert_eq!(report.verdict.severity(), Severity::Ok);
    assert_eq!(report.verdict.message(), NO_ISSUES_TEXT);
    assert_eq!(report.shelf_count(), 2);
    assert_eq!(report.disk_count(), 24);
    assert_eq!(report.array.full_name, "ArrayName");
}

#[tokio::test]
async fn test_degraded_psu_is_critical() {
    let server = MockServer::start().await;
    mount_array(
        &server,
        "shelves/detail_psu_degraded.json",
        "disks/detail_healthy.json",
    )
    .await;

    let report = test_client(&server).check_hardware_health().await.unwrap();

    assert_eq!(report.verdict.severity(), Severity::Critical);
    assert_eq!(report.verdict.fragments(), &[PSU_FAULT]);
    assert_eq!(report.verdict.message(), "PSU or Supply Fault! ");
}

#[tokio::test]
async fn test_faults_across_categories_keep_order() {
    let server = MockServer::start().await;
    mount_array(
        &server,
        "shelves/detail_psu_degraded.json",
        "disks/detail_one_failed.json",
    )
    .await;

    let report = test_client(&server).check_hardware_health().await.unwrap();

    assert_eq!(report.verdict.fragments(), &[PSU_FAULT, DISK_FAULT]);
    assert_eq!(report.disks[5].state, "failed");
}

#[tokio::test]
async fn test_auth_failure_stops_before_other_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/tokens"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(load_fixture("auth/unauthorized.json")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = test_client(&server).check_hardware_health().await.unwrap_err();

    assert_eq!(err.stage, HealthStage::Authentication);
    assert!(err.source.is_auth_error());
}

#[tokio::test]
async fn test_single_controller_shelf_fails_shelf_stage() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_get(&server, "/v1/arrays/detail", load_fixture("arrays/detail.json")).await;
    mount_get(
        &server,
        "/v1/shelves",
        serde_json::json!({"startRow": 0, "endRow": 1, "data": [{"id": "s0"}]}),
    )
    .await;
    mount_get(
        &server,
        "/v1/shelves/detail",
        serde_json::json!({"data": [{
            "psu_overall_status": "OK",
            "fan_overall_status": "OK",
            "temp_overall_status": "OK",
            "ctrlrs": [{"ctrlr_attrset_list": [{"hw_state": "ready"}]}]
        }]}),
    )
    .await;

    let err = test_client(&server).check_hardware_health().await.unwrap_err();

    assert_eq!(err.stage, HealthStage::Shelves);
    assert_eq!(
        err.to_string(),
        "shelf status: Missing field in response: data[0].ctrlrs[1]"
    );
}

#[tokio::test]
async fn test_disk_fetch_failure_is_reported() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_get(&server, "/v1/arrays/detail", load_fixture("arrays/detail.json")).await;
    mount_get(&server, "/v1/shelves", load_fixture("shelves/list.json")).await;
    mount_get(
        &server,
        "/v1/shelves/detail",
        load_fixture("shelves/detail_healthy.json"),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v1/disks/detail"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = test_client(&server).check_hardware_health().await.unwrap_err();

    assert_eq!(err.stage, HealthStage::Disks);
}

#[tokio::test]
async fn test_repeated_checks_are_identical() {
    let first_server = MockServer::start().await;
    mount_array(
        &first_server,
        "shelves/detail_healthy.json",
        "disks/detail_healthy.json",
    )
    .await;
    let second_server = MockServer::start().await;
    mount_array(
        &second_server,
        "shelves/detail_healthy.json",
        "disks/detail_healthy.json",
    )
    .await;

    let first = test_client(&first_server).check_hardware_health().await.unwrap();
    let second = test_client(&second_server).check_hardware_health().await.unwrap();

    assert_eq!(first, second);
}
