//! Fault types.
//!
//! Faults are values on the wire (the `detail` of a SOAP fault, or
//! `TaskInfo.error`) but errors in Rust: they reach callers wrapped in
//! [`SoapFault`], through `ClientError::Fault`.
//!
//! Invariants:
//! - `AnyFault::is_a` follows the declared hierarchy, so callers can match on
//!   a family (`FileFault`) without listing every concrete fault.
//! - Unknown fault types keep the `MethodFault` fields.

use serde::Serialize;
use thiserror::Error;

use crate::types::{
    LocalizableMessage, LocalizedMethodFault, ManagedObjectReference, VirtualMachinePowerState,
};
use crate::xml::{vim_any, vim_type};

vim_type! {
    /// Root of the fault hierarchy.
    pub struct MethodFault {
        /// The fault that led to this one.
        opt fault_cause: Box<AnyFault> => "faultCause",
        many fault_message: LocalizableMessage => "faultMessage",
    }
}

vim_type! {
    /// Faults any method can raise, not declared in method signatures.
    pub struct RuntimeFault extends MethodFault {}
}

vim_type! {
    /// Faults declared by individual methods.
    pub struct VimFault extends MethodFault {}
}

vim_type! {
    pub struct InvalidArgument extends RuntimeFault {
        opt invalid_property: String => "invalidProperty",
    }
}

vim_type! {
    pub struct InvalidRequest extends RuntimeFault {}
}

vim_type! {
    pub struct MethodNotFound extends InvalidRequest {
        req receiver: ManagedObjectReference => "receiver",
        req method: String => "method",
    }
}

vim_type! {
    pub struct ManagedObjectNotFound extends RuntimeFault {
        req obj: ManagedObjectReference => "obj",
    }
}

vim_type! {
    pub struct NotImplemented extends RuntimeFault {}
}

vim_type! {
    pub struct NotSupported extends RuntimeFault {}
}

vim_type! {
    pub struct RequestCanceled extends RuntimeFault {}
}

vim_type! {
    pub struct SystemError extends RuntimeFault {
        req reason: String => "reason",
    }
}

vim_type! {
    pub struct SecurityError extends RuntimeFault {}
}

vim_type! {
    pub struct NoPermission extends SecurityError {
        opt object: ManagedObjectReference => "object",
        opt privilege_id: String => "privilegeId",
    }
}

vim_type! {
    /// The session is missing, expired or was terminated.
    pub struct NotAuthenticated extends NoPermission {}
}

vim_type! {
    pub struct InvalidLogin extends VimFault {}
}

vim_type! {
    pub struct InvalidLocale extends VimFault {}
}

vim_type! {
    pub struct FileFault extends VimFault {
        req file: String => "file",
    }
}

vim_type! {
    pub struct FileNotFound extends FileFault {}
}

vim_type! {
    pub struct FileAlreadyExists extends FileFault {}
}

vim_type! {
    pub struct CannotAccessFile extends FileFault {}
}

vim_type! {
    pub struct InvalidState extends VimFault {}
}

vim_type! {
    pub struct InvalidPowerState extends InvalidState {
        opt requested_state: VirtualMachinePowerState => "requestedState",
        req existing_state: VirtualMachinePowerState => "existingState",
    }
}

vim_type! {
    pub struct TaskInProgress extends VimFault {
        req task: ManagedObjectReference => "task",
    }
}

vim_type! {
    pub struct DuplicateName extends VimFault {
        req name: String => "name",
        req object: ManagedObjectReference => "object",
    }
}

vim_type! {
    pub struct InvalidName extends VimFault {
        req name: String => "name",
        opt entity: ManagedObjectReference => "entity",
    }
}

vim_type! {
    pub struct AlreadyExists extends VimFault {
        opt name: String => "name",
    }
}

vim_type! {
    pub struct NotFound extends VimFault {}
}

vim_type! {
    pub struct InvalidProperty extends MethodFault {
        req name: String => "name",
    }
}

vim_type! {
    pub struct HostCommunication extends RuntimeFault {}
}

vim_type! {
    pub struct HostNotConnected extends HostCommunication {}
}

vim_type! {
    pub struct HostNotReachable extends HostCommunication {}
}

vim_any! {
    /// Any fault, dispatched on `xsi:type`.
    pub enum AnyFault: MethodFault {
        MethodFault [],
        RuntimeFault [base],
        VimFault [base],
        InvalidArgument [base base],
        InvalidRequest [base base],
        MethodNotFound [base base base],
        ManagedObjectNotFound [base base],
        NotImplemented [base base],
        NotSupported [base base],
        RequestCanceled [base base],
        SystemError [base base],
        SecurityError [base base],
        NoPermission [base base base],
        NotAuthenticated [base base base base],
        InvalidLogin [base base],
        InvalidLocale [base base],
        FileFault [base base],
        FileNotFound [base base base],
        FileAlreadyExists [base base base],
        CannotAccessFile [base base base],
        InvalidState [base base],
        InvalidPowerState [base base base],
        TaskInProgress [base base],
        DuplicateName [base base],
        InvalidName [base base],
        AlreadyExists [base base],
        NotFound [base base],
        InvalidProperty [base],
        HostCommunication [base base],
        HostNotConnected [base base base],
        HostNotReachable [base base base],
    }
}

impl AnyFault {
    /// The fault that caused this one, if the server reported it.
    pub fn cause(&self) -> Option<&AnyFault> {
        self.root().fault_cause.as_deref()
    }

    /// First server-provided message text, if any.
    pub fn first_message(&self) -> Option<&str> {
        self.root()
            .fault_message
            .iter()
            .find_map(|m| m.message.as_deref())
    }
}

/// A fault raised by a vim25 method call.
///
/// Built from a SOAP `Fault` body, or from a task's `LocalizedMethodFault`.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{code}: {message}")]
pub struct SoapFault {
    /// SOAP fault code, usually `ServerFaultCode`.
    pub code: String,
    /// Localized fault text.
    pub message: String,
    /// Typed fault detail, when the server sent one.
    pub detail: Option<AnyFault>,
}

impl SoapFault {
    /// Schema type name of the detail fault.
    pub fn fault_type(&self) -> Option<&str> {
        self.detail.as_ref().map(AnyFault::type_name)
    }

    /// Whether the detail fault is `type_name` or one of its subtypes.
    pub fn is_a(&self, type_name: &str) -> bool {
        self.detail.as_ref().is_some_and(|d| d.is_a(type_name))
    }
}

impl From<LocalizedMethodFault> for SoapFault {
    fn from(fault: LocalizedMethodFault) -> Self {
        let message = fault
            .localized_message
            .or_else(|| fault.fault.first_message().map(str::to_string))
            .unwrap_or_else(|| fault.fault.type_name().to_string());
        Self {
            code: "ServerFaultCode".to_string(),
            message,
            detail: Some(fault.fault),
        }
    }
}
