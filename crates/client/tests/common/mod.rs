//! Common test utilities for integration tests.
//!
//! Shared helpers for mounting SOAP responses on a wiremock server and
//! building clients against it.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every vim25 call is a `POST /sdk`; mocks tell methods apart by the
//!   request element in the body
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use secrecy::SecretString;
use wiremock::matchers::{BodyContainsMatcher, body_string_contains, method, path};

// Re-export test utilities from vim25-client
#[allow(unused_imports)]
pub use vim25_client::testing::{fault_envelope, load_fixture, soap_envelope};

#[allow(unused_imports)]
pub use vim25_client::{ClientError, Credentials, ManagedObjectReference, Vim25Client};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session cookie handed out by mocked logins.
#[allow(dead_code)]
pub const SESSION: &str = "\"52b6f5b0-session\"";

/// Matches requests invoking vim25 method `name`.
#[allow(dead_code)]
pub fn soap_method(name: &str) -> BodyContainsMatcher {
    body_string_contains(format!("<{name} "))
}

/// HTTP 200 with a fixture body.
#[allow(dead_code)]
pub fn soap_ok(fixture: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/xml; charset=utf-8")
        .set_body_string(load_fixture(fixture))
}

/// HTTP 500 carrying a fault fixture.
#[allow(dead_code)]
pub fn soap_fault(fixture: &str) -> ResponseTemplate {
    ResponseTemplate::new(500)
        .insert_header("content-type", "text/xml; charset=utf-8")
        .set_body_string(load_fixture(fixture))
}

/// Mount `response` for every call of `name`.
#[allow(dead_code)]
pub async fn mount_method(server: &MockServer, name: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(soap_method(name))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mount the vCenter service content.
#[allow(dead_code)]
pub async fn mount_service_content(server: &MockServer) {
    mount_method(
        server,
        "RetrieveServiceContent",
        soap_ok("service/retrieve_service_content.xml"),
    )
    .await;
}

/// Mount a successful login that sets [`SESSION`]; returns the login counter.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    let body = load_fixture("session/login.xml");

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(soap_method("Login"))
        .respond_with(move |_: &wiremock::Request| {
            count_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(200)
                .insert_header(
                    "set-cookie",
                    format!("vmware_soap_session={SESSION}; Path=/; HttpOnly; Secure;").as_str(),
                )
                .set_body_string(body.clone())
        })
        .mount(server)
        .await;

    count
}

/// A client with credentials pointed at `server`.
#[allow(dead_code)]
pub fn client(server: &MockServer) -> Vim25Client {
    Vim25Client::builder()
        .base_url(server.uri())
        .credentials(Credentials::new(
            "administrator@vsphere.local",
            SecretString::new("testpassword".to_string().into()),
        ))
        .build()
        .unwrap()
}

/// A client without credentials pointed at `server`.
#[allow(dead_code)]
pub fn anonymous_client(server: &MockServer) -> Vim25Client {
    Vim25Client::builder().base_url(server.uri()).build().unwrap()
}

#[allow(dead_code)]
pub fn vm(id: &str) -> ManagedObjectReference {
    ManagedObjectReference::new("VirtualMachine", id)
}

#[allow(dead_code)]
pub fn task(id: &str) -> ManagedObjectReference {
    ManagedObjectReference::new("Task", id)
}
