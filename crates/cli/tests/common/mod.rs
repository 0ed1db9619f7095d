//! Shared test utilities for vim25 CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount SOAP fixtures on a wiremock server.
//!
//! Invariants / Assumptions:
//! - Every vim25 call is a `POST /sdk`; mocks tell methods apart by the
//!   request element in the body.

use assert_cmd::Command;
use wiremock::matchers::{BodyContainsMatcher, body_string_contains, method, path};

#[allow(unused_imports)]
pub use vim25_client::testing::{fault_envelope, load_fixture};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns a hermetic `vim25` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Connection and profile env vars are cleared to ensure no leakage from the host.
pub fn vim25_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vim25");

    cmd.env("DOTENV_DISABLED", "1");

    for var in [
        "VIM25_URL",
        "VIM25_USERNAME",
        "VIM25_PASSWORD",
        "VIM25_SKIP_VERIFY",
        "VIM25_TIMEOUT",
        "VIM25_MAX_RETRIES",
        "VIM25_API_VERSION",
        "VIM25_PROFILE",
        "VIM25_CONFIG_PATH",
    ] {
        cmd.env_remove(var);
    }

    cmd
}

/// A hermetic command pointed at `server`, logging in as administrator.
#[allow(dead_code)]
pub fn vim25_cmd_for(server: &MockServer) -> Command {
    let mut cmd = vim25_cmd();
    cmd.env("VIM25_URL", server.uri())
        .env("VIM25_USERNAME", "administrator@vsphere.local")
        .env("VIM25_PASSWORD", "testpassword")
        .env("VIM25_MAX_RETRIES", "0");
    cmd
}

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

/// HTTP 500 carrying a fault body.
#[allow(dead_code)]
pub fn soap_fault(body: String) -> ResponseTemplate {
    ResponseTemplate::new(500)
        .insert_header("content-type", "text/xml; charset=utf-8")
        .set_body_string(body)
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

/// Mount service content, login and logout.
#[allow(dead_code)]
pub async fn mount_session(server: &MockServer) {
    mount_method(
        server,
        "RetrieveServiceContent",
        soap_ok("service/retrieve_service_content.xml"),
    )
    .await;
    mount_method(
        server,
        "Login",
        soap_ok("session/login.xml").insert_header(
            "set-cookie",
            "vmware_soap_session=\"52b6f5b0-session\"; Path=/; HttpOnly; Secure;",
        ),
    )
    .await;
    mount_method(server, "Logout", soap_ok("session/logout.xml")).await;
}
