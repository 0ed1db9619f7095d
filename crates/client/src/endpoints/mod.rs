//! vim25 method implementations over SOAP.
//!
//! Each function encodes one request type, posts it through
//! [`request::invoke`] and decodes the `returnval`.

mod auth;
mod events;
mod property;
mod request;
mod service;
mod tasks;
mod view;

pub use auth::{login, logout};
pub use events::query_events;
pub use property::{continue_retrieve_properties_ex, retrieve_properties_ex};
pub use request::{RequestContext, SDK_PATH, SoapResponse, invoke};
pub use service::{current_time, retrieve_service_content, service_instance};
pub use tasks::{power_off_vm_task, power_on_vm_task};
pub use view::{create_container_view, destroy_view};
