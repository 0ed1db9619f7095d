//! SOAP 1.1 envelope codec for vim25 requests and responses.
//!
//! Responsibilities:
//! - Wrap a request body in an envelope declaring the namespaces vim25 uses.
//! - Unwrap the `{Method}Response` element of a response envelope.
//! - Decode `Fault` bodies into [`SoapFault`], including the typed detail.
//!
//! Does NOT handle:
//! - HTTP transport, cookies or retries (see `endpoints`).
//!
//! Invariants:
//! - The request body element is `<{method} xmlns="urn:vim25">`, so request
//!   fields need no prefix.
//! - A fault detail without `xsi:type` is identified by its element name with
//!   the trailing `Fault` removed (`NotAuthenticatedFault` is `NotAuthenticated`).

use thiserror::Error;

use crate::types::{AnyFault, SoapFault};
use crate::xml::{VimType, XmlError, XmlNode, XmlValue, XmlWriter, optional, repeated, required};

pub const SOAP_ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
pub const VIM25_NAMESPACE: &str = "urn:vim25";

/// Name of the element carrying a method's return value.
const RETURNVAL: &str = "returnval";

/// Errors produced when decoding a response envelope.
#[derive(Error, Debug)]
pub enum SoapError {
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// The server answered with a SOAP fault.
    #[error(transparent)]
    Fault(Box<SoapFault>),
}

/// Encode a request envelope for `method` with the fields of `body`.
pub fn encode_request<B: VimType>(method: &str, body: &B) -> Result<String, XmlError> {
    let mut w = XmlWriter::new();
    w.declaration()?;
    w.start(
        "soapenv:Envelope",
        &[
            ("xmlns:soapenv", SOAP_ENV_NAMESPACE),
            ("xmlns:xsd", XSD_NAMESPACE),
            ("xmlns:xsi", crate::xml::XSI_NAMESPACE),
        ],
    )?;
    w.start("soapenv:Body", &[])?;
    w.start(method, &[("xmlns", VIM25_NAMESPACE)])?;
    body.write_fields(&mut w)?;
    w.end(method)?;
    w.end("soapenv:Body")?;
    w.end("soapenv:Envelope")?;
    w.into_string()
}

/// Decode a response envelope.
///
/// Returns the first element of the SOAP body (the `{Method}Response`
/// element), or the decoded fault when the body is a `Fault`.
pub fn decode_response(xml: &str) -> Result<XmlNode, SoapError> {
    let envelope = XmlNode::parse(xml)?;
    let element = body_element(&envelope)?;
    if element.name == "Fault" {
        return Err(SoapError::Fault(Box::new(decode_fault(element)?)));
    }
    Ok(element.clone())
}

/// Decode the fault carried by a response envelope, if there is one.
///
/// Used for HTTP 500 responses, which may or may not carry a SOAP fault.
pub fn fault_from_envelope(xml: &str) -> Option<SoapFault> {
    match decode_response(xml) {
        Err(SoapError::Fault(fault)) => Some(*fault),
        _ => None,
    }
}

fn body_element(envelope: &XmlNode) -> Result<&XmlNode, XmlError> {
    if envelope.name != "Envelope" {
        return Err(XmlError::Malformed(format!(
            "expected a SOAP Envelope, found <{}>",
            envelope.name
        )));
    }
    let body = envelope.child("Body").ok_or(XmlError::MissingElement {
        type_name: "Envelope",
        element: "Body",
    })?;
    body.first_element()
        .ok_or_else(|| XmlError::Malformed("SOAP Body is empty".to_string()))
}

/// Decode a `<Fault>` element.
pub fn decode_fault(fault: &XmlNode) -> Result<SoapFault, XmlError> {
    let code: String = required(fault, "Fault", "faultcode")?;
    let message: String = optional(fault, "faultstring")?.unwrap_or_default();
    let detail = match fault.child("detail").and_then(XmlNode::first_element) {
        Some(node) => Some(decode_detail(node)?),
        None => None,
    };
    Ok(SoapFault {
        code: strip_prefix(code.trim()).to_string(),
        message,
        detail,
    })
}

fn decode_detail(node: &XmlNode) -> Result<AnyFault, XmlError> {
    if node.xsi_type.is_some() {
        return AnyFault::read_xml(node);
    }
    let type_name = node.name.strip_suffix("Fault").unwrap_or(&node.name);
    AnyFault::decode_as(type_name, node)
}

fn strip_prefix(qualified: &str) -> &str {
    qualified
        .rsplit_once(':')
        .map_or(qualified, |(_, local)| local)
}

/// The required `returnval` of a response element.
pub fn returnval<T: XmlValue>(response: &XmlNode) -> Result<T, XmlError> {
    required(response, "MethodResponse", RETURNVAL)
}

/// The `returnval` of a method that may return nothing.
pub fn optional_returnval<T: XmlValue>(response: &XmlNode) -> Result<Option<T>, XmlError> {
    optional(response, RETURNVAL)
}

/// Every `returnval` of a method returning an array.
pub fn repeated_returnval<T: XmlValue>(response: &XmlNode) -> Result<Vec<T>, XmlError> {
    repeated(response, RETURNVAL)
}
