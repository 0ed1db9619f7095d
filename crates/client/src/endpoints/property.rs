//! `PropertyCollector` endpoints.

use crate::endpoints::{RequestContext, invoke};
use crate::error::Result;
use crate::soap::optional_returnval;
use crate::types::requests::{
    ContinueRetrievePropertiesExRequestType, RetrievePropertiesExRequestType,
};
use crate::types::{ManagedObjectReference, PropertyFilterSpec, RetrieveOptions, RetrieveResult};

/// `RetrievePropertiesEx`; returns the first page of results.
///
/// The server returns no `returnval` when nothing matches, which is mapped
/// to an empty result.
pub async fn retrieve_properties_ex(
    ctx: &RequestContext<'_>,
    property_collector: &ManagedObjectReference,
    specs: &[PropertyFilterSpec],
    options: &RetrieveOptions,
) -> Result<RetrieveResult> {
    let body = RetrievePropertiesExRequestType {
        this: property_collector.clone(),
        spec_set: specs.to_vec(),
        options: options.clone(),
    };
    let response = invoke(ctx, "RetrievePropertiesEx", &body).await?;
    Ok(optional_returnval(&response.element)?.unwrap_or_else(empty_result))
}

/// `ContinueRetrievePropertiesEx`; returns the page after `token`.
pub async fn continue_retrieve_properties_ex(
    ctx: &RequestContext<'_>,
    property_collector: &ManagedObjectReference,
    token: &str,
) -> Result<RetrieveResult> {
    let body = ContinueRetrievePropertiesExRequestType {
        this: property_collector.clone(),
        token: token.to_string(),
    };
    let response = invoke(ctx, "ContinueRetrievePropertiesEx", &body).await?;
    Ok(optional_returnval(&response.element)?.unwrap_or_else(empty_result))
}

fn empty_result() -> RetrieveResult {
    RetrieveResult {
        token: None,
        objects: Vec::new(),
    }
}
