//! Integration tests for `vim25 about` and `vim25 time`.

mod common;

use common::{MockServer, mount_method, mount_session, soap_ok, vim25_cmd, vim25_cmd_for};
use predicates::prelude::*;

#[tokio::test]
async fn test_about_table_without_credentials() {
    let server = MockServer::start().await;
    mount_method(
        &server,
        "RetrieveServiceContent",
        soap_ok("service/retrieve_service_content.xml"),
    )
    .await;

    vim25_cmd()
        .env("VIM25_URL", server.uri())
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Name: VMware vCenter Server 8.0.2 build-22385739",
        ))
        .stdout(predicate::str::contains("API Type: VirtualCenter"));
}

#[tokio::test]
async fn test_about_json() {
    let server = MockServer::start().await;
    mount_method(
        &server,
        "RetrieveServiceContent",
        soap_ok("service/retrieve_service_content.xml"),
    )
    .await;

    let output = vim25_cmd()
        .env("VIM25_URL", server.uri())
        .args(["about", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["apiVersion"], "8.0.2.0");
    assert_eq!(value["apiType"], "VirtualCenter");
}

#[tokio::test]
async fn test_time_reports_server_clock() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_method(&server, "CurrentTime", soap_ok("session/current_time.xml")).await;

    let output = vim25_cmd_for(&server)
        .args(["time", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(
        value["server_time"]
            .as_str()
            .unwrap()
            .starts_with("2024-05-01T10:15:30.500")
    );
    assert!(value["skew_ms"].is_i64());
}

#[test]
fn test_missing_url_is_a_config_error() {
    vim25_cmd()
        .arg("about")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}
