//! Turns the outcome of one attempt into a verdict for the retry loop.

use crate::rate_limit::RateLimitInfo;
use crate::transport::{TransportError, TransportResponse};
use crate::validation::ValidationErrors;
use crate::{Error, ErrorKind};
use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The body every API response is wrapped in.
///
/// `code == 0` (or absent) means success; anything else is an application
/// level failure regardless of the HTTP status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiEnvelope {
    fn failure_code(&self) -> Option<i64> {
        self.code.filter(|code| *code != 0)
    }

    fn message(&self) -> Option<String> {
        self.message.clone().filter(|m| !m.is_empty())
    }
}

/// A successful attempt, before output validation.
#[derive(Debug)]
pub(crate) struct Delivered {
    pub data: Value,
    pub message: Option<String>,
    pub request_id: Option<String>,
    pub status: StatusCode,
    pub headers: HeaderMap,
}

#[derive(Debug)]
pub(crate) enum Verdict {
    Success(Delivered),
    Retryable(Error),
    Terminal(Error),
}

impl Verdict {
    fn failure(error: Error) -> Self {
        if error.is_retryable() {
            Verdict::Retryable(error)
        } else {
            Verdict::Terminal(error)
        }
    }
}

/// Classifies a failure that happened before any response arrived.
pub(crate) fn classify_failure(err: TransportError) -> Verdict {
    let timed_out = err.is_timeout();
    let error = Error::transport(err);
    if timed_out {
        Verdict::Retryable(error.with_kind(ErrorKind::Timeout))
    } else {
        Verdict::Retryable(error)
    }
}

/// Classifies a received response.
pub(crate) fn classify_response(response: TransportResponse) -> Verdict {
    let TransportResponse {
        status,
        headers,
        body,
    } = response;

    if !status.is_success() {
        let envelope = serde_json::from_str::<ApiEnvelope>(&body).unwrap_or_default();
        let code = envelope
            .failure_code()
            .unwrap_or_else(|| i64::from(status.as_u16()));
        let message = envelope.message().unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        });

        let error = Error::api(message, code)
            .with_status(status)
            .with_request_id(envelope.request_id)
            .with_rate_limit(RateLimitInfo::from_headers(&headers));

        if error.is_client_error() {
            tracing::error!(
                status = status.as_u16(),
                code = code,
                response = %body,
                "Client error (4xx)"
            );
        } else {
            tracing::warn!(
                status = status.as_u16(),
                code = code,
                response = %body,
                "Server error"
            );
        }
        return Verdict::failure(error);
    }

    let envelope = if body.trim().is_empty() {
        ApiEnvelope::default()
    } else {
        match serde_json::from_str::<ApiEnvelope>(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    raw_response = %body,
                    "Response body is not an API envelope"
                );
                let mut errors = ValidationErrors::new();
                errors.add("$", format!("response body is not an API envelope: {}", e));
                return Verdict::Terminal(Error::validation(errors).with_status(status));
            }
        }
    };

    if let Some(code) = envelope.failure_code() {
        let message = envelope.message().unwrap_or_else(|| "API Error".to_string());
        if (400..500).contains(&code) {
            tracing::error!(code = code, message = %message, "API rejected request");
        } else {
            tracing::warn!(code = code, message = %message, "API returned an error code");
        }
        let error = Error::api(message, code)
            .with_status(status)
            .with_request_id(envelope.request_id);
        return Verdict::failure(error);
    }

    Verdict::Success(Delivered {
        data: envelope.data.unwrap_or(Value::Null),
        message: envelope.message,
        request_id: envelope.request_id,
        status,
        headers,
    })
}
