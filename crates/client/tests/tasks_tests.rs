//! VM power operation and task polling tests.
//!
//! # Invariants
//! - Power operations return the task without waiting for it
//! - `wait_for_task` maps the `error` state to `ClientError::TaskFailed`

mod common;

use common::*;
use std::time::Duration;
use vim25_client::TaskInfoState;
use vim25_client::types::AnyFault;
use wiremock::matchers::{body_string_contains, method, path};

const POLL: Duration = Duration::from_millis(10);

#[tokio::test]
async fn test_power_on_vm_returns_task() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(soap_method("PowerOnVM_Task"))
        .and(body_string_contains(
            r#"<_this type="VirtualMachine">vm-42</_this>"#,
        ))
        .respond_with(soap_ok("tasks/power_on_vm_task.xml"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = client(&mock_server);
    let t = client.power_on_vm(&vm("vm-42"), None).await.unwrap();

    assert_eq!(t, task("task-101"));
}

#[tokio::test]
async fn test_power_off_vm_returns_task() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;
    mount_method(
        &mock_server,
        "PowerOffVM_Task",
        soap_ok("tasks/power_off_vm_task.xml"),
    )
    .await;

    let mut client = client(&mock_server);
    let t = client.power_off_vm(&vm("vm-43")).await.unwrap();

    assert_eq!(t.to_string(), "Task:task-102");
}

#[tokio::test]
async fn test_wait_for_task_polls_until_success() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(soap_method("RetrievePropertiesEx"))
        .respond_with(soap_ok("tasks/task_info_running.xml"))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;
    mount_method(
        &mock_server,
        "RetrievePropertiesEx",
        soap_ok("tasks/task_info_success.xml"),
    )
    .await;

    let mut client = client(&mock_server);
    let mut progress = Vec::new();
    let mut record = |p: i32| progress.push(p);
    let info = client
        .wait_for_task_with_progress(
            &task("task-101"),
            Duration::from_secs(10),
            POLL,
            Some(&mut record),
        )
        .await
        .unwrap();

    assert_eq!(info.state, TaskInfoState::Success);
    assert_eq!(info.entity_name.as_deref(), Some("web-01"));
    assert!(info.complete_time.is_some());
    assert_eq!(progress, vec![40, 40]);
}

#[tokio::test]
async fn test_wait_for_task_error_is_task_failed() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;
    mount_method(
        &mock_server,
        "RetrievePropertiesEx",
        soap_ok("tasks/task_info_error.xml"),
    )
    .await;

    let mut client = client(&mock_server);
    let err = client
        .wait_for_task(&task("task-102"), Duration::from_secs(10), POLL)
        .await
        .unwrap_err();

    match err {
        ClientError::TaskFailed { task, fault } => {
            assert_eq!(task, "Task:task-102");
            assert!(fault.message.starts_with("The attempted operation cannot be performed"));
            assert!(matches!(fault.detail, Some(AnyFault::InvalidPowerState(_))));
        }
        other => panic!("expected TaskFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wait_for_task_times_out() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;
    mount_method(
        &mock_server,
        "RetrievePropertiesEx",
        soap_ok("tasks/task_info_running.xml"),
    )
    .await;

    let mut client = client(&mock_server);
    let err = client
        .wait_for_task(&task("task-101"), Duration::from_millis(50), POLL)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::OperationTimeout { .. }));
}

#[tokio::test]
async fn test_task_info_for_unknown_task_is_not_found() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;
    mount_method(&mock_server, "RetrievePropertiesEx", soap_ok("property/empty.xml")).await;

    let mut client = client(&mock_server);
    let err = client.task_info(&task("task-404")).await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
}
