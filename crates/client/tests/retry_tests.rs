//! Transport retry tests.
//!
//! # Invariants
//! - 429/502/503/504 are retried with exponential backoff
//! - HTTP 500 is never retried; it carries faults or server errors
//! - Retries are bounded by `max_retries`; 0 means a single attempt
//! - Transport timeouts surface as `ClientError::Timeout`

mod common;

use std::net::TcpListener;
use std::time::Duration;

use common::*;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_retry_on_503_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    mount_service_content(&mock_server).await;

    let mut client = anonymous_client(&mock_server);
    let result = client.retrieve_service_content().await;

    assert!(result.is_ok(), "unexpected error: {:?}", result.err());
}

#[tokio::test]
async fn test_max_retries_exceeded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .respond_with(ResponseTemplate::new(429))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut client = Vim25Client::builder()
        .base_url(mock_server.uri())
        .max_retries(1)
        .build()
        .unwrap();
    let err = client.retrieve_service_content().await.unwrap_err();

    match err {
        ClientError::MaxRetriesExceeded {
            attempts,
            last_status,
        } => {
            assert_eq!(attempts, 2);
            assert_eq!(last_status, 429);
        }
        other => panic!("expected MaxRetriesExceeded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_zero_max_retries_sends_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = Vim25Client::builder()
        .base_url(mock_server.uri())
        .max_retries(0)
        .build()
        .unwrap();
    let err = client.retrieve_service_content().await.unwrap_err();

    match err {
        ClientError::MaxRetriesExceeded {
            attempts,
            last_status,
        } => {
            assert_eq!(attempts, 1);
            assert_eq!(last_status, 503);
        }
        other => panic!("expected MaxRetriesExceeded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_500_without_fault_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = anonymous_client(&mock_server);
    let err = client.retrieve_service_content().await.unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_xml_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>proxy</body></html>"))
        .mount(&mock_server)
        .await;

    let mut client = anonymous_client(&mock_server);
    let err = client.retrieve_service_content().await.unwrap_err();

    assert!(matches!(err, ClientError::Xml(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut client = Vim25Client::builder()
        .base_url(format!("http://127.0.0.1:{port}"))
        .max_retries(1)
        .build()
        .unwrap();
    let err = client.retrieve_service_content().await.unwrap_err();

    match err {
        ClientError::ConnectionRefused(url) => {
            assert_eq!(url, format!("http://127.0.0.1:{port}/sdk"));
        }
        other => panic!("expected ConnectionRefused, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_response_is_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("service/retrieve_service_content.xml"))
                .set_delay(Duration::from_secs(5)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = Vim25Client::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(250))
        .max_retries(2)
        .build()
        .unwrap();
    let err = client.retrieve_service_content().await.unwrap_err();

    match err {
        ClientError::Timeout(timeout) => assert_eq!(timeout, Duration::from_millis(250)),
        other => panic!("expected Timeout, got {other:?}"),
    }
}
