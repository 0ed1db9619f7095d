//! Container views and inventory listing for [`Vim25Client`].

use tracing::warn;

use crate::client::Vim25Client;
use crate::endpoints;
use crate::error::Result;
use crate::types::{ManagedObjectReference, ObjectContent, PropertyFilterSpec};

impl Vim25Client {
    /// Create a container view over objects of `types` below `container`.
    ///
    /// `container` defaults to the root folder. An empty `types` list
    /// selects every managed entity.
    pub async fn create_container_view(
        &mut self,
        container: Option<&ManagedObjectReference>,
        types: &[String],
        recursive: bool,
    ) -> Result<ManagedObjectReference> {
        let view_manager = self
            .manager("viewManager", |sc| sc.view_manager.as_ref())
            .await?;
        let container = match container {
            Some(c) => c.clone(),
            None => self.retrieve_service_content().await?.root_folder,
        };
        crate::retry_call!(
            self,
            __ctx,
            endpoints::create_container_view(&__ctx, &view_manager, &container, types, recursive)
                .await
        )
    }

    /// Destroy a view created with [`create_container_view`](Self::create_container_view).
    pub async fn destroy_view(&mut self, view: &ManagedObjectReference) -> Result<()> {
        crate::retry_call!(self, __ctx, endpoints::destroy_view(&__ctx, view).await)
    }

    /// Properties `paths` of every `managed_type` object in the inventory,
    /// fetched `page_size` objects at a time when given.
    ///
    /// Uses a temporary recursive container view on the root folder, which
    /// is destroyed before returning.
    pub async fn inventory(
        &mut self,
        managed_type: &str,
        paths: &[&str],
        page_size: Option<i32>,
    ) -> Result<Vec<ObjectContent>> {
        let view = self
            .create_container_view(None, &[managed_type.to_string()], true)
            .await?;
        let spec = PropertyFilterSpec::for_container_view(
            view.clone(),
            managed_type,
            paths.iter().copied(),
        );

        let result = self.retrieve_all_properties(&[spec], page_size).await;

        if let Err(e) = self.destroy_view(&view).await {
            warn!("Failed to destroy container view {}: {}", view, e);
        }
        result
    }
}
