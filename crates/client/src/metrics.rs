//! Metrics collection for SOAP call performance.
//!
//! This module provides metrics for vim25 method calls:
//! - Request latency histograms
//! - Request counters (total, retries, errors)
//! - Fault counters by fault type
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (see [`crate::metrics_exporter`])
//! - Persistent storage of metrics
//!
//! # Invariants
//! - All metrics use consistent label names: `method`, `status`, `error_category`, `fault`
//! - Metric recording is infallible
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "vim25_soap_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "vim25_soap_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "vim25_soap_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "vim25_soap_errors_total";

/// Metric name for fault counter.
pub const METRIC_FAULTS_TOTAL: &str = "vim25_soap_faults_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors without a SOAP fault
    Http5xx,
    /// vim25 fault raised by the method
    Fault,
    /// Response could not be decoded
    Decode,
    /// Request timeout
    Timeout,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Fault => "fault",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) | ClientError::OperationTimeout { .. } => {
                ErrorCategory::Timeout
            }
            ClientError::ConnectionRefused(_) => ErrorCategory::Transport,
            ClientError::Fault(_) | ClientError::TaskFailed { .. } => ErrorCategory::Fault,
            ClientError::Xml(_) | ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::ApiError { status, .. }
            | ClientError::MaxRetriesExceeded {
                last_status: status,
                ..
            } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::HttpError(e) => {
                if e.is_timeout() {
                    ErrorCategory::Timeout
                } else if e.is_connect() {
                    ErrorCategory::Transport
                } else {
                    ErrorCategory::Unknown
                }
            }
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for vim25 SOAP calls.
///
/// A lightweight wrapper around the `metrics` crate macros recording with
/// consistent labels.
///
/// # Example
///
/// ```rust,ignore
/// use vim25_client::metrics::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("RetrievePropertiesEx", Duration::from_millis(150), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of a SOAP call.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(&self, method: &str, duration: Duration, status: Option<u16>) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt, including retries.
    pub fn record_request(&self, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record a retry attempt (1-based).
    pub fn record_retry(&self, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error from a ClientError, counting faults by type.
    pub fn record_client_error(&self, method: &str, error: &ClientError) {
        self.record_error(method, ErrorCategory::from(error));
        if let Some(fault) = error.fault() {
            self.record_fault(method, fault.fault_type().unwrap_or("unknown"));
        }
    }

    /// Record a fault raised by a method.
    pub fn record_fault(&self, method: &str, fault_type: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_FAULTS_TOTAL,
            "method" => method.to_string(),
            "fault" => fault_type.to_string(),
        )
        .increment(1);
    }
}
