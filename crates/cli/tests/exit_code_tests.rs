//! Integration tests for structured exit codes.
//!
//! These tests verify that `vim25` returns the documented exit codes for
//! different failures, enabling reliable shell scripting.

mod common;

use common::{
    MockServer, ResponseTemplate, fault_envelope, mount_method, mount_session, soap_fault,
    soap_ok, vim25_cmd, vim25_cmd_for,
};

#[tokio::test]
async fn test_success_returns_exit_code_0() {
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
        .code(0);
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    vim25_cmd()
        .env("VIM25_URL", "https://localhost:1")
        .env("VIM25_MAX_RETRIES", "0")
        .arg("about")
        .assert()
        .code(3);
}

#[tokio::test]
async fn test_managed_object_not_found_returns_exit_code_4() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_method(
        &server,
        "PowerOnVM_Task",
        soap_fault(common::load_fixture("faults/managed_object_not_found.xml")),
    )
    .await;

    vim25_cmd_for(&server)
        .args(["power-on", "vm-999"])
        .assert()
        .code(4);
}

#[tokio::test]
async fn test_no_permission_returns_exit_code_6() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_method(
        &server,
        "QueryEvents",
        soap_fault(fault_envelope("NoPermission", "Permission to perform this operation was denied.")),
    )
    .await;

    vim25_cmd_for(&server).arg("events").assert().code(6);
}

#[tokio::test]
async fn test_rate_limited_returns_exit_code_7() {
    let server = MockServer::start().await;
    mount_method(
        &server,
        "RetrieveServiceContent",
        ResponseTemplate::new(429),
    )
    .await;

    vim25_cmd()
        .env("VIM25_URL", server.uri())
        .env("VIM25_MAX_RETRIES", "0")
        .arg("about")
        .assert()
        .code(7);
}

#[tokio::test]
async fn test_service_unavailable_returns_exit_code_8() {
    let server = MockServer::start().await;
    mount_method(
        &server,
        "RetrieveServiceContent",
        ResponseTemplate::new(503),
    )
    .await;

    vim25_cmd()
        .env("VIM25_URL", server.uri())
        .env("VIM25_MAX_RETRIES", "0")
        .arg("about")
        .assert()
        .code(8);
}

#[test]
fn test_invalid_config_returns_exit_code_1() {
    vim25_cmd()
        .env("VIM25_URL", "ftp://vcenter.local")
        .arg("about")
        .assert()
        .code(1);
}
