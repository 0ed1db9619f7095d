//! SOAP POST with retry and exponential backoff.
//!
//! Responsibilities:
//! - POST an encoded envelope to `{base_url}/sdk` with the vim25 headers.
//! - Retry HTTP 429/502/503/504 and connection failures with exponential
//!   backoff (1s, 2s, 4s, ... = 2^attempt).
//! - Report transport timeouts as `ClientError::Timeout`.
//! - Turn HTTP 500 SOAP faults into `ClientError::Fault` and other failures
//!   into `ClientError::ApiError`.
//! - Record request, retry, error and latency metrics.
//!
//! Does NOT handle:
//! - Session renewal on `NotAuthenticated` (see `retry_call!` in `client`).

use std::fmt;
use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::auth::{SESSION_COOKIE, parse_session_cookie};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::soap::{self, SoapError};
use crate::xml::{VimType, XmlNode};

/// Path of the vim25 SOAP endpoint.
pub const SDK_PATH: &str = "/sdk";

/// Connection settings shared by every SOAP call.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub http: &'a Client,
    pub base_url: &'a str,
    /// vim25 release announced in `SOAPAction`, e.g. `8.0.1.0`.
    pub api_version: &'a str,
    /// Session cookie value, once logged in.
    pub session_cookie: Option<&'a str>,
    pub max_retries: usize,
    /// Per-request timeout the HTTP client was built with.
    pub timeout: Duration,
    pub metrics: Option<&'a MetricsCollector>,
}

/// A decoded method response.
#[derive(Clone)]
pub struct SoapResponse {
    /// The `{Method}Response` element.
    pub element: XmlNode,
    /// Session cookie set by the server, if any.
    pub session_cookie: Option<String>,
}

impl fmt::Debug for SoapResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoapResponse")
            .field("element", &self.element)
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Invoke `method` with request `body` and decode the response envelope.
pub async fn invoke<B: VimType>(
    ctx: &RequestContext<'_>,
    method: &str,
    body: &B,
) -> Result<SoapResponse> {
    let envelope = soap::encode_request(method, body)?;
    let started = Instant::now();
    let result = send_soap_request(ctx, method, envelope).await;

    if let Some(metrics) = ctx.metrics {
        let status = result.as_ref().ok().map(|_| 200);
        metrics.record_request_duration(method, started.elapsed(), status);
        if let Err(e) = &result {
            metrics.record_client_error(method, e);
        }
    }

    result
}

async fn send_soap_request(
    ctx: &RequestContext<'_>,
    method: &str,
    envelope: String,
) -> Result<SoapResponse> {
    let max_retries = ctx.max_retries;
    let url = format!("{}{}", ctx.base_url, SDK_PATH);

    for attempt in 0..=max_retries {
        let mut builder = ctx
            .http
            .post(&url)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", format!("urn:vim25/{}", ctx.api_version))
            .body(envelope.clone());
        if let Some(cookie) = ctx.session_cookie {
            builder = builder.header(COOKIE, format!("{SESSION_COOKIE}={cookie}"));
        }

        if let Some(metrics) = ctx.metrics {
            metrics.record_request(method);
        }
        debug!(method, attempt = attempt + 1, "Sending SOAP request");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() && attempt < max_retries => {
                backoff(ctx, method, attempt, "connection failed").await;
                continue;
            }
            Err(e) if e.is_connect() => {
                debug!(method, error = %e, "Connection failed, retries exhausted");
                return Err(ClientError::ConnectionRefused(url));
            }
            Err(e) if e.is_timeout() => {
                debug!(method, error = %e, "SOAP request timed out");
                return Err(ClientError::Timeout(ctx.timeout));
            }
            Err(e) => return Err(ClientError::from(e)),
        };

        let status = response.status();
        if ClientError::is_retryable_status(status.as_u16()) {
            if attempt < max_retries {
                backoff(ctx, method, attempt, status.as_str()).await;
                continue;
            }
            debug!(
                method,
                attempts = attempt + 1,
                "Max retries exhausted for SOAP request"
            );
            return Err(ClientError::MaxRetriesExceeded {
                attempts: max_retries + 1,
                last_status: status.as_u16(),
            });
        }

        if attempt > 0 {
            debug!(method, attempt = attempt + 1, "Request succeeded after retry");
        }

        let session_cookie = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .find_map(parse_session_cookie);
        let body = response.text().await?;

        return decode(status, &url, &body).map(|element| SoapResponse {
            element,
            session_cookie,
        });
    }

    Err(ClientError::MaxRetriesExceeded {
        attempts: max_retries + 1,
        last_status: 0,
    })
}

async fn backoff(ctx: &RequestContext<'_>, method: &str, attempt: usize, reason: &str) {
    let backoff_secs = 2u64.pow(attempt as u32);
    debug!(
        method,
        attempt = attempt + 1,
        backoff_secs,
        reason,
        "Transient failure, retrying with exponential backoff"
    );
    if let Some(metrics) = ctx.metrics {
        metrics.record_retry(method, attempt + 1);
    }
    tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
}

fn decode(status: StatusCode, url: &str, body: &str) -> Result<XmlNode> {
    if status.is_success() {
        return Ok(soap::decode_response(body)?);
    }

    // vim25 reports faults as HTTP 500 with a SOAP Fault body.
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        match soap::decode_response(body) {
            Err(SoapError::Fault(fault)) => return Err(ClientError::Fault(fault)),
            Err(SoapError::Xml(e)) => debug!(error = %e, "HTTP 500 without a SOAP fault"),
            Ok(_) => {}
        }
    }

    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.trim().to_string()
    };
    Err(ClientError::ApiError {
        status: status.as_u16(),
        url: url.to_string(),
        message,
    })
}
