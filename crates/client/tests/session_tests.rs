//! Login, logout and session cookie tests.
//!
//! # Invariants
//! - The `vmware_soap_session` cookie from `Login` is replayed on later calls
//! - Secrets never leak into `Debug` output

mod common;

use common::*;
use secrecy::SecretString;
use wiremock::matchers::{header, method, path};

#[tokio::test]
async fn test_login_stores_session() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    let logins = mount_login(&mock_server).await;

    let mut client = client(&mock_server);
    assert!(!client.is_logged_in());

    let session = client.login().await.unwrap();

    assert_eq!(session.user_name, "VSPHERE.LOCAL\\Administrator");
    assert_eq!(session.call_count, Some(0));
    assert!(client.is_logged_in());
    assert_eq!(
        client.user_session().map(|s| s.key.as_str()),
        Some("52b6f5b0-7c1d-3d4e-8f9a-0b1c2d3e4f50")
    );
    assert_eq!(logins.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_session_cookie_is_sent_after_login() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(soap_method("CurrentTime"))
        .and(header("cookie", format!("vmware_soap_session={SESSION}").as_str()))
        .respond_with(soap_ok("session/current_time.xml"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = client(&mock_server);
    // Logs in lazily before the call.
    let result = client.current_time().await;

    assert!(result.is_ok(), "unexpected error: {:?}", result.err());
    assert!(client.is_logged_in());
}

#[tokio::test]
async fn test_invalid_login_is_auth_error() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_method(&mock_server, "Login", soap_fault("faults/invalid_login.xml")).await;

    let mut client = client(&mock_server);
    let err = client.login().await.unwrap_err();

    assert!(err.is_auth_error());
    let fault = err.fault().unwrap();
    assert!(fault.is_a("InvalidLogin"));
    assert_eq!(
        fault.message,
        "Cannot complete login due to an incorrect user name or password."
    );
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_login_without_cookie_is_invalid_response() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_method(&mock_server, "Login", soap_ok("session/login.xml")).await;

    let mut client = client(&mock_server);
    let err = client.login().await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_login_without_credentials_fails() {
    let mock_server = MockServer::start().await;

    let mut client = anonymous_client(&mock_server);
    let err = client.login().await.unwrap_err();

    assert!(matches!(err, ClientError::AuthFailed(_)));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(soap_method("Logout"))
        .respond_with(soap_ok("session/logout.xml"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = client(&mock_server);
    client.login().await.unwrap();
    client.logout().await.unwrap();
    assert!(!client.is_logged_in());

    // A second logout is a no-op.
    client.logout().await.unwrap();
}

#[test]
fn test_client_debug_hides_password() {
    let client = Vim25Client::builder()
        .base_url("https://vcenter.local".to_string())
        .credentials(Credentials::new(
            "admin",
            SecretString::new("super-secret-password".to_string().into()),
        ))
        .build()
        .unwrap();

    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret-password"));
}
