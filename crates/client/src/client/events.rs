//! Event query methods for [`Vim25Client`].

use crate::client::Vim25Client;
use crate::endpoints;
use crate::error::Result;
use crate::types::{AnyEvent, EventFilterSpec};

impl Vim25Client {
    /// Query events matching `filter` from the event manager.
    ///
    /// Returns [`ClientError::NotFound`](crate::ClientError::NotFound) on
    /// endpoints without an event manager.
    pub async fn query_events(&mut self, filter: &EventFilterSpec) -> Result<Vec<AnyEvent>> {
        let event_manager = self
            .manager("eventManager", |sc| sc.event_manager.as_ref())
            .await?;
        crate::retry_call!(
            self,
            __ctx,
            endpoints::query_events(&__ctx, &event_manager, filter).await
        )
    }
}
