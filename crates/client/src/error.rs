//! Error types for the vim25 client.

use std::time::Duration;
use thiserror::Error;

use crate::soap::SoapError;
use crate::types::SoapFault;
use crate::xml::XmlError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during vim25 client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed or no credentials are configured.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP response that did not carry a SOAP fault.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The method raised a vim25 fault.
    #[error("SOAP fault: {0}")]
    Fault(Box<SoapFault>),

    /// A task finished in the `error` state.
    #[error("Task {task} failed: {fault}")]
    TaskFailed { task: String, fault: Box<SoapFault> },

    /// The response could not be decoded.
    #[error("Invalid response: {0}")]
    Xml(#[from] XmlError),

    /// The response was well formed but not what the method returns.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The HTTP request did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// A long-running operation did not finish in time.
    #[error("Operation '{operation}' timed out after {timeout:?}")]
    OperationTimeout {
        operation: String,
        timeout: Duration,
    },

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Retries were exhausted on a retryable status.
    #[error("Maximum retries exceeded ({attempts} attempts, last status {last_status})")]
    MaxRetriesExceeded { attempts: usize, last_status: u16 },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A manager or property the operation needs is not available.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<SoapError> for ClientError {
    fn from(err: SoapError) -> Self {
        match err {
            SoapError::Xml(e) => Self::Xml(e),
            SoapError::Fault(f) => Self::Fault(f),
        }
    }
}

impl ClientError {
    /// Check if an HTTP status code is retryable.
    ///
    /// 429 (rate limiting) and 502/503/504 (gateway and availability errors)
    /// are transient. 500 carries SOAP faults and is never retried.
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// The fault carried by this error, if any.
    pub fn fault(&self) -> Option<&SoapFault> {
        match self {
            Self::Fault(f) | Self::TaskFailed { fault: f, .. } => Some(f),
            _ => None,
        }
    }

    /// Whether the server rejected the call because the session is not authenticated.
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, Self::Fault(f) if f.is_a("NotAuthenticated"))
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::AuthFailed(_) => true,
            Self::Fault(f) => f.is_a("NotAuthenticated") || f.is_a("InvalidLogin"),
            _ => false,
        }
    }
}
