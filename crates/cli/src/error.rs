//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants (and the faults they carry) to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use vim25_client::{ClientError, SoapFault};

/// Structured exit codes for `vim25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure, including configuration errors.
    GeneralError = 1,

    /// Invalid credentials, missing credentials or an unauthenticated session.
    AuthenticationFailed = 2,

    /// Network, timeout, TLS or DNS failure.
    ConnectionError = 3,

    /// The managed object or manager does not exist.
    NotFound = 4,

    /// The server rejected an argument, or the response could not be decoded.
    ValidationError = 5,

    /// The session user lacks a privilege.
    PermissionDenied = 6,

    /// HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// HTTP 502/503/504.
    ServiceUnavailable = 8,

    /// Any other fault raised by the method or the task.
    Fault = 9,

    /// SIGINT/Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    fn from_status(status: u16) -> Self {
        match status {
            400 => ExitCode::ValidationError,
            401 => ExitCode::AuthenticationFailed,
            403 => ExitCode::PermissionDenied,
            404 => ExitCode::NotFound,
            429 => ExitCode::RateLimited,
            502..=504 => ExitCode::ServiceUnavailable,
            _ => ExitCode::GeneralError,
        }
    }

    fn from_fault(fault: &SoapFault) -> Self {
        if fault.is_a("NotAuthenticated") || fault.is_a("InvalidLogin") {
            ExitCode::AuthenticationFailed
        } else if fault.is_a("NoPermission") {
            ExitCode::PermissionDenied
        } else if fault.is_a("ManagedObjectNotFound")
            || fault.is_a("NotFound")
            || fault.is_a("FileNotFound")
        {
            ExitCode::NotFound
        } else if fault.is_a("InvalidArgument")
            || fault.is_a("InvalidRequest")
            || fault.is_a("InvalidProperty")
            || fault.is_a("InvalidName")
        {
            ExitCode::ValidationError
        } else {
            ExitCode::Fault
        }
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,

            ClientError::ConnectionRefused(_)
            | ClientError::Timeout(_)
            | ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::NotFound(_) => ExitCode::NotFound,

            ClientError::Xml(_) | ClientError::InvalidResponse(_) => ExitCode::ValidationError,

            ClientError::Fault(fault) | ClientError::TaskFailed { fault, .. } => {
                Self::from_fault(fault)
            }

            ClientError::ApiError { status, .. } => Self::from_status(*status),
            ClientError::MaxRetriesExceeded { last_status, .. } => {
                Self::from_status(*last_status)
            }

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::OperationTimeout { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vim25_client::{AnyFault, XmlNode};

    /// A fault of `type_name` whose detail element carries `fields`.
    fn fault_with(type_name: &str, fields: &str) -> Box<SoapFault> {
        let xml = format!("<{type_name}Fault>{fields}</{type_name}Fault>");
        let detail = AnyFault::decode_as(type_name, &XmlNode::parse(&xml).unwrap()).unwrap();
        Box::new(SoapFault {
            code: "ServerFaultCode".to_string(),
            message: type_name.to_string(),
            detail: Some(detail),
        })
    }

    fn fault(type_name: &str) -> Box<SoapFault> {
        fault_with(type_name, "")
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::Fault.as_i32(), 9);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_auth_errors() {
        let err = ClientError::AuthFailed("no credentials configured".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);
        assert_eq!(
            ExitCode::from(&ClientError::Fault(fault("InvalidLogin"))),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(
            ExitCode::from(&ClientError::Fault(fault("NotAuthenticated"))),
            ExitCode::AuthenticationFailed
        );
    }

    #[test]
    fn test_connection_errors() {
        let err = ClientError::ConnectionRefused("vcenter.local:443".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);
        let err = ClientError::Timeout(Duration::from_secs(30));
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);
    }

    #[test]
    fn test_fault_categories() {
        assert_eq!(
            ExitCode::from(&ClientError::Fault(fault_with(
                "ManagedObjectNotFound",
                r#"<obj type="VirtualMachine">vm-404</obj>"#
            ))),
            ExitCode::NotFound
        );
        assert_eq!(
            ExitCode::from(&ClientError::Fault(fault("NoPermission"))),
            ExitCode::PermissionDenied
        );
        assert_eq!(
            ExitCode::from(&ClientError::Fault(fault("InvalidArgument"))),
            ExitCode::ValidationError
        );
        assert_eq!(
            ExitCode::from(&ClientError::Fault(fault_with(
                "SystemError",
                "<reason>disk full</reason>"
            ))),
            ExitCode::Fault
        );
    }

    #[test]
    fn test_task_failure_uses_task_fault() {
        let err = ClientError::TaskFailed {
            task: "Task:task-101".to_string(),
            fault: fault_with(
                "InvalidPowerState",
                "<requestedState>poweredOn</requestedState><existingState>poweredOn</existingState>",
            ),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::Fault);
    }

    #[test]
    fn test_status_mapping() {
        let api = |status| ClientError::ApiError {
            status,
            url: "https://vc/sdk".to_string(),
            message: String::new(),
        };
        assert_eq!(ExitCode::from(&api(403)), ExitCode::PermissionDenied);
        assert_eq!(ExitCode::from(&api(503)), ExitCode::ServiceUnavailable);
        assert_eq!(ExitCode::from(&api(418)), ExitCode::GeneralError);

        let err = ClientError::MaxRetriesExceeded {
            attempts: 4,
            last_status: 429,
        };
        assert_eq!(ExitCode::from(&err), ExitCode::RateLimited);
    }

    #[test]
    fn test_anyhow_chain_lookup() {
        let err = anyhow::Error::new(ClientError::NotFound("eventManager".to_string()))
            .context("Failed to query events");
        assert_eq!(err.exit_code(), ExitCode::NotFound);

        let other = anyhow::anyhow!("plain failure");
        assert_eq!(other.exit_code(), ExitCode::GeneralError);
    }
}
