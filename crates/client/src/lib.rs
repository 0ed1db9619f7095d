//! vim25 SOAP client.
//!
//! This crate provides typed bindings for the VMware vSphere Web Services
//! (vim25) vocabulary, an XML codec for it, and an async client that talks
//! SOAP to vCenter Server and ESXi with automatic session renewal.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod soap;
pub mod types;
pub mod xml;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{Credentials, SESSION_COOKIE, SessionManager, parse_session_cookie};
pub use client::Vim25Client;
pub use client::builder::Vim25ClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use soap::{SoapError, decode_response, encode_request};
pub use types::{
    AboutInfo, AnyEvent, AnyFault, AnyValue, EventFilterSpec, ManagedObjectReference,
    ObjectContent, PropertyFilterSpec, RetrieveResult, ServiceContent, SoapFault, TaskInfo,
    TaskInfoState, UserSession,
};
pub use xml::{UnknownEnumValue, VimType, XmlError, XmlNode, XmlValue};
