//! Virtual machine power operations, which run as tasks.

use crate::endpoints::{RequestContext, invoke};
use crate::error::Result;
use crate::soap::returnval;
use crate::types::ManagedObjectReference;
use crate::types::requests::{PowerOnVmRequestType, ThisRequestType};

/// `PowerOnVM_Task`; returns the task reference.
pub async fn power_on_vm_task(
    ctx: &RequestContext<'_>,
    vm: &ManagedObjectReference,
    host: Option<&ManagedObjectReference>,
) -> Result<ManagedObjectReference> {
    let body = PowerOnVmRequestType {
        this: vm.clone(),
        host: host.cloned(),
    };
    let response = invoke(ctx, "PowerOnVM_Task", &body).await?;
    Ok(returnval(&response.element)?)
}

/// `PowerOffVM_Task`; returns the task reference.
pub async fn power_off_vm_task(
    ctx: &RequestContext<'_>,
    vm: &ManagedObjectReference,
) -> Result<ManagedObjectReference> {
    let response = invoke(ctx, "PowerOffVM_Task", &ThisRequestType::new(vm.clone())).await?;
    Ok(returnval(&response.element)?)
}
