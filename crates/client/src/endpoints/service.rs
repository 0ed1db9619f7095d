//! `ServiceInstance` endpoints.

use chrono::{DateTime, Utc};

use crate::endpoints::{RequestContext, invoke};
use crate::error::Result;
use crate::soap::returnval;
use crate::types::requests::{RetrieveServiceContentRequestType, ThisRequestType};
use crate::types::{ManagedObjectReference, ServiceContent};

/// The well-known `ServiceInstance` managed object.
pub fn service_instance() -> ManagedObjectReference {
    ManagedObjectReference::new("ServiceInstance", "ServiceInstance")
}

/// Fetch the service content; allowed without a session.
pub async fn retrieve_service_content(ctx: &RequestContext<'_>) -> Result<ServiceContent> {
    let body = RetrieveServiceContentRequestType {
        this: service_instance(),
    };
    let response = invoke(ctx, "RetrieveServiceContent", &body).await?;
    Ok(returnval(&response.element)?)
}

/// Server clock.
pub async fn current_time(ctx: &RequestContext<'_>) -> Result<DateTime<Utc>> {
    let response = invoke(ctx, "CurrentTime", &ThisRequestType::new(service_instance())).await?;
    Ok(returnval(&response.element)?)
}
