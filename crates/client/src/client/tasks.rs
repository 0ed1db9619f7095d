//! Virtual machine power operations and task polling for [`Vim25Client`].
//!
//! # What this module handles:
//! - Starting `PowerOnVM_Task` / `PowerOffVM_Task`
//! - Reading a task's `info` property
//! - Polling a task until it finishes
//!
//! # Invariants
//! - A task in state `error` becomes [`ClientError::TaskFailed`] carrying the fault
//! - Polling gives up with [`ClientError::OperationTimeout`] once the deadline passes

use std::time::{Duration, Instant};

use tracing::debug;

use crate::client::Vim25Client;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::types::{
    ManagedObjectReference, PropertyFilterSpec, SoapFault, TaskInfo, TaskInfoState,
};

impl Vim25Client {
    /// Start powering on `vm`, optionally on a specific `host`. Returns the task.
    pub async fn power_on_vm(
        &mut self,
        vm: &ManagedObjectReference,
        host: Option<&ManagedObjectReference>,
    ) -> Result<ManagedObjectReference> {
        crate::retry_call!(
            self,
            __ctx,
            endpoints::power_on_vm_task(&__ctx, vm, host).await
        )
    }

    /// Start powering off `vm`. Returns the task.
    pub async fn power_off_vm(
        &mut self,
        vm: &ManagedObjectReference,
    ) -> Result<ManagedObjectReference> {
        crate::retry_call!(self, __ctx, endpoints::power_off_vm_task(&__ctx, vm).await)
    }

    /// Current `info` of `task`.
    pub async fn task_info(&mut self, task: &ManagedObjectReference) -> Result<TaskInfo> {
        let spec = PropertyFilterSpec::for_object(task.clone(), ["info"]);
        let result = self.retrieve_properties(&[spec], None).await?;

        let object = result
            .objects
            .into_iter()
            .find(|o| o.obj == *task)
            .ok_or_else(|| ClientError::NotFound(format!("task {task}")))?;
        object
            .property("info")
            .and_then(|v| v.as_task_info())
            .cloned()
            .ok_or_else(|| {
                ClientError::InvalidResponse(format!("task {task} returned no TaskInfo"))
            })
    }

    /// Poll `task` every `poll_interval` until it succeeds, fails or `timeout` passes.
    pub async fn wait_for_task(
        &mut self,
        task: &ManagedObjectReference,
        timeout: Duration,
        poll_interval: Duration,
    ) -> Result<TaskInfo> {
        self.wait_for_task_with_progress(task, timeout, poll_interval, None)
            .await
    }

    /// Like [`wait_for_task`](Self::wait_for_task), reporting percent complete
    /// to `progress_cb` while the task runs.
    pub async fn wait_for_task_with_progress(
        &mut self,
        task: &ManagedObjectReference,
        timeout: Duration,
        poll_interval: Duration,
        mut progress_cb: Option<&mut (dyn FnMut(i32) + Send)>,
    ) -> Result<TaskInfo> {
        let start = Instant::now();

        loop {
            let info = self.task_info(task).await?;

            match info.state {
                TaskInfoState::Success => {
                    debug!("Task {} completed", task);
                    return Ok(info);
                }
                TaskInfoState::Error => {
                    let fault = match info.error {
                        Some(error) => SoapFault::from(error),
                        None => SoapFault {
                            code: "ServerFaultCode".to_string(),
                            message: "task failed without a fault".to_string(),
                            detail: None,
                        },
                    };
                    return Err(ClientError::TaskFailed {
                        task: task.to_string(),
                        fault: Box::new(fault),
                    });
                }
                TaskInfoState::Queued | TaskInfoState::Running => {
                    if let (Some(cb), Some(progress)) = (progress_cb.as_deref_mut(), info.progress)
                    {
                        cb(progress);
                    }
                }
            }

            if start.elapsed() > timeout {
                return Err(ClientError::OperationTimeout {
                    operation: format!("wait_for_task({task})"),
                    timeout,
                });
            }

            tokio::time::sleep(poll_interval).await;
        }
    }
}
