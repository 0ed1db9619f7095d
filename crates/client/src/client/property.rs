//! Property collector methods for [`Vim25Client`].
//!
//! # What this module handles:
//! - Single-page retrieval (`RetrievePropertiesEx`)
//! - Continuation by token (`ContinueRetrievePropertiesEx`)
//! - Collecting every page into one list
//!
//! # What this module does NOT handle:
//! - Building filter specs (see [`PropertyFilterSpec`] helpers)

use tracing::debug;

use crate::client::Vim25Client;
use crate::endpoints;
use crate::error::Result;
use crate::types::{
    ManagedObjectReference, ObjectContent, PropertyFilterSpec, RetrieveOptions, RetrieveResult,
};

impl Vim25Client {
    async fn property_collector(&mut self) -> Result<ManagedObjectReference> {
        Ok(self.retrieve_service_content().await?.property_collector)
    }

    /// Retrieve the first page of properties matching `specs`.
    ///
    /// `max_objects` is a page size hint; follow `token` in the result with
    /// [`continue_retrieve_properties`](Self::continue_retrieve_properties).
    pub async fn retrieve_properties(
        &mut self,
        specs: &[PropertyFilterSpec],
        max_objects: Option<i32>,
    ) -> Result<RetrieveResult> {
        let collector = self.property_collector().await?;
        let options = RetrieveOptions { max_objects };
        crate::retry_call!(
            self,
            __ctx,
            endpoints::retrieve_properties_ex(&__ctx, &collector, specs, &options).await
        )
    }

    /// Retrieve the page after `token`.
    pub async fn continue_retrieve_properties(&mut self, token: &str) -> Result<RetrieveResult> {
        let collector = self.property_collector().await?;
        crate::retry_call!(
            self,
            __ctx,
            endpoints::continue_retrieve_properties_ex(&__ctx, &collector, token).await
        )
    }

    /// Retrieve every page of properties matching `specs`.
    pub async fn retrieve_all_properties(
        &mut self,
        specs: &[PropertyFilterSpec],
        page_size: Option<i32>,
    ) -> Result<Vec<ObjectContent>> {
        let mut page = self.retrieve_properties(specs, page_size).await?;
        let mut objects = std::mem::take(&mut page.objects);

        while let Some(token) = page.token.take() {
            debug!("Fetching next property page ({} objects so far)", objects.len());
            page = self.continue_retrieve_properties(&token).await?;
            objects.append(&mut page.objects);
        }

        Ok(objects)
    }
}
