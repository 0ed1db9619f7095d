//! `EventManager` endpoints.

use crate::endpoints::{RequestContext, invoke};
use crate::error::Result;
use crate::soap::repeated_returnval;
use crate::types::requests::QueryEventsRequestType;
use crate::types::{AnyEvent, EventFilterSpec, ManagedObjectReference};

/// `QueryEvents`: events matching `filter`, newest first as the server orders them.
pub async fn query_events(
    ctx: &RequestContext<'_>,
    event_manager: &ManagedObjectReference,
    filter: &EventFilterSpec,
) -> Result<Vec<AnyEvent>> {
    let body = QueryEventsRequestType {
        this: event_manager.clone(),
        filter: filter.clone(),
    };
    let response = invoke(ctx, "QueryEvents", &body).await?;
    Ok(repeated_returnval(&response.element)?)
}
