//! `ViewManager` and view endpoints.

use crate::endpoints::{RequestContext, invoke};
use crate::error::Result;
use crate::soap::returnval;
use crate::types::ManagedObjectReference;
use crate::types::requests::{CreateContainerViewRequestType, ThisRequestType};

/// Create a view over the objects of `types` below `container`.
pub async fn create_container_view(
    ctx: &RequestContext<'_>,
    view_manager: &ManagedObjectReference,
    container: &ManagedObjectReference,
    types: &[String],
    recursive: bool,
) -> Result<ManagedObjectReference> {
    let body = CreateContainerViewRequestType {
        this: view_manager.clone(),
        container: container.clone(),
        r#type: types.to_vec(),
        recursive,
    };
    let response = invoke(ctx, "CreateContainerView", &body).await?;
    Ok(returnval(&response.element)?)
}

/// Destroy a view created with [`create_container_view`].
pub async fn destroy_view(ctx: &RequestContext<'_>, view: &ManagedObjectReference) -> Result<()> {
    invoke(ctx, "DestroyView", &ThisRequestType::new(view.clone())).await?;
    Ok(())
}
