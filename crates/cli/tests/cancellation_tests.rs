//! Integration tests for graceful Ctrl+C/SIGINT handling.
//!
//! Unix-only because they send SIGINT to the child process. We assert:
//! - exit code is 130
//! - stderr contains the cancellation message

#![cfg(unix)]

mod common;

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use common::{MockServer, mount_session, soap_ok};
use tokio::sync::Notify;

fn vim25_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("vim25")
}

fn send_sigint(pid: u32) {
    // SAFETY: standard Unix kill syscall
    unsafe {
        libc::kill(pid as i32, libc::SIGINT);
    }
}

#[tokio::test]
async fn test_task_wait_ctrl_c_exits_130_with_message() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    let request_seen = Arc::new(Notify::new());
    let request_seen_clone = Arc::clone(&request_seen);

    common::Mock::given(wiremock::matchers::method("POST"))
        .and(common::soap_method("RetrievePropertiesEx"))
        .respond_with(move |_req: &wiremock::Request| {
            request_seen_clone.notify_one();
            soap_ok("tasks/task_info_running.xml").set_delay(Duration::from_secs(60))
        })
        .mount(&server)
        .await;

    let child = tokio::process::Command::new(vim25_bin())
        .env("DOTENV_DISABLED", "1")
        .env("VIM25_URL", server.uri())
        .env("VIM25_USERNAME", "administrator@vsphere.local")
        .env("VIM25_PASSWORD", "testpassword")
        .env_remove("VIM25_PROFILE")
        .env_remove("VIM25_CONFIG_PATH")
        .args(["--quiet", "task", "task-101", "--wait"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn vim25");

    let pid = child.id().expect("child pid");
    tokio::time::timeout(Duration::from_secs(5), request_seen.notified())
        .await
        .expect("expected task poll before SIGINT");
    send_sigint(pid);

    let output = tokio::time::timeout(Duration::from_secs(5), child.wait_with_output())
        .await
        .expect("process should exit promptly")
        .expect("wait_with_output ok");

    assert_eq!(output.status.code(), Some(130));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Operation cancelled by user"));
}
