//! Testing utilities for vim25 client tests.
//!
//! Helpers for loading SOAP fixtures and wrapping method responses in an
//! envelope. Available when running tests or when the `test-utils` feature
//! is enabled.
//!
//! # Example
//! ```ignore
//! use vim25_client::testing::{load_fixture, soap_envelope};
//!
//! let body = load_fixture("service/retrieve_service_content.xml");
//! let custom = soap_envelope("<CurrentTimeResponse xmlns=\"urn:vim25\">...</CurrentTimeResponse>");
//! ```

use std::path::Path;

/// Load an XML fixture file from the fixtures directory.
///
/// # Panics
/// If the fixture file cannot be read.
pub fn load_fixture(fixture_path: &str) -> String {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

/// Wrap a method response element in a SOAP envelope.
pub fn soap_envelope(body: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<soapenv:Envelope xmlns:soapenc="http://schemas.xmlsoap.org/soap/encoding/" "#,
            r#"xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" "#,
            r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<soapenv:Body>{}</soapenv:Body></soapenv:Envelope>"
        ),
        body
    )
}

/// A SOAP fault envelope whose detail is a `{fault_type}Fault` element.
pub fn fault_envelope(fault_type: &str, message: &str) -> String {
    soap_envelope(&format!(
        concat!(
            "<soapenv:Fault><faultcode>ServerFaultCode</faultcode>",
            "<faultstring>{message}</faultstring>",
            r#"<detail><{ty}Fault xmlns="urn:vim25" xsi:type="{ty}"></{ty}Fault></detail>"#,
            "</soapenv:Fault>"
        ),
        message = message,
        ty = fault_type
    ))
}
