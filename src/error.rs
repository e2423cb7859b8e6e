//! The uniform error type returned by every API call.
//!
//! Failures of every kind (bad input, network trouble, timeouts, API-level
//! rejections, cancellation) surface as a single [`Error`]. Callers tell them
//! apart by inspecting [`Error::kind`], [`Error::code`] and the wrapped
//! [`source`](std::error::Error::source), not by matching distinct types.

use crate::rate_limit::RateLimitInfo;
use crate::validation::ValidationErrors;
use http::StatusCode;
use std::time::Duration;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input or output did not match the operation's declared shape.
    Validation,
    /// The transport failed before a response was received.
    Transport,
    /// No response arrived before the attempt's deadline.
    Timeout,
    /// The API answered with a failing HTTP status or a non-zero `code`.
    Api,
    /// The call's cancellation token fired.
    Cancelled,
    /// The client or request was misconfigured.
    Configuration,
    /// The request body could not be serialized.
    Serialization,
}

/// The error returned by API calls.
///
/// # Examples
///
/// ```no_run
/// use tiktok_business_api::{Client, ErrorKind};
/// use tiktok_business_api::catalog::advertiser::AdvertiserInfoInput;
///
/// # async fn example() -> Result<(), tiktok_business_api::Error> {
/// let client = Client::builder().access_token("token").build()?;
/// let input = AdvertiserInfoInput::new(["7000000000000000000"]);
///
/// match client.advertiser().info(&input).await {
///     Ok(response) => println!("{} advertisers", response.list.len()),
///     Err(e) if e.kind() == ErrorKind::Api => {
///         eprintln!("API rejected the call: code={:?} request_id={:?}", e.code(), e.request_id());
///     }
///     Err(e) => eprintln!("call failed: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    code: Option<i64>,
    status: Option<StatusCode>,
    request_id: Option<String>,
    rate_limit: Option<RateLimitInfo>,
    #[source]
    source: Option<BoxError>,
}

impl Error {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            status: None,
            request_id: None,
            rate_limit: None,
            source: None,
        }
    }

    /// Creates an API-level error with the resolved numeric code.
    pub fn api(message: impl Into<String>, code: i64) -> Self {
        Self {
            code: Some(code),
            ..Self::new(ErrorKind::Api, message)
        }
    }

    /// Creates a validation error from a list of field problems.
    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            message: format!("Validation failed: {}", errors),
            source: Some(Box::new(errors)),
            ..Self::new(ErrorKind::Validation, "")
        }
    }

    /// Creates a transport error, preserving the underlying cause's message.
    pub fn transport<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: cause.to_string(),
            source: Some(Box::new(cause)),
            ..Self::new(ErrorKind::Transport, "")
        }
    }

    /// Creates a timeout error for an attempt that exceeded `after`.
    pub fn timeout(after: Duration) -> Self {
        Self::new(
            ErrorKind::Timeout,
            format!("Request timed out after {}ms", after.as_millis()),
        )
    }

    /// Creates the error raised when a call is cancelled.
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled, "Request was cancelled")
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Creates a serialization error wrapping the serde failure.
    pub fn serialization(cause: serde_json::Error) -> Self {
        Self {
            message: format!("Failed to serialize request: {}", cause),
            source: Some(Box::new(cause)),
            ..Self::new(ErrorKind::Serialization, "")
        }
    }

    pub(crate) fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    pub(crate) fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub(crate) fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    pub(crate) fn with_rate_limit(mut self, info: Option<RateLimitInfo>) -> Self {
        self.rate_limit = info;
        self
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human readable message. For API errors this is the server's message when it sent one.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The resolved numeric code: the body `code` when non-zero, otherwise the HTTP status.
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// The HTTP status of the failing response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// The server-assigned request identifier, if the response carried one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Rate limit hints parsed from the failing response's headers.
    pub fn rate_limit_info(&self) -> Option<&RateLimitInfo> {
        self.rate_limit.as_ref()
    }

    /// Returns `true` for failures in the client error band (`[400, 500)`).
    ///
    /// Both the resolved code and the HTTP status are checked, so an HTTP 401
    /// carrying body code `40100` is a client error.
    pub fn is_client_error(&self) -> bool {
        let in_band = |c: i64| (400..500).contains(&c);
        self.code.is_some_and(in_band)
            || self.status.is_some_and(|s| in_band(i64::from(s.as_u16())))
    }

    /// Returns `true` if another attempt could plausibly succeed.
    ///
    /// Transport failures and timeouts are retryable, as are API errors outside
    /// the client error band. Everything else requires the caller to act.
    ///
    /// ```
    /// use tiktok_business_api::Error;
    ///
    /// assert!(Error::api("Internal error", 500).is_retryable());
    /// assert!(Error::api("System busy", 50002).is_retryable());
    /// assert!(!Error::api("Invalid parameter", 400).is_retryable());
    /// assert!(!Error::cancelled().is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self.kind {
            ErrorKind::Transport | ErrorKind::Timeout => true,
            ErrorKind::Api => !self.is_client_error(),
            ErrorKind::Validation
            | ErrorKind::Cancelled
            | ErrorKind::Configuration
            | ErrorKind::Serialization => false,
        }
    }

    /// Returns `true` if the call was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.kind == ErrorKind::Cancelled
    }

    /// Returns `true` if the last attempt hit its deadline.
    pub fn is_timeout(&self) -> bool {
        self.kind == ErrorKind::Timeout
    }
}

/// A specialized `Result` type for API calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_api_error_band() {
        assert!(Error::api("bad", 404).is_client_error());
        assert!(!Error::api("busy", 500).is_client_error());

        let auth = Error::api("Access token is invalid", 40100).with_status(StatusCode::UNAUTHORIZED);
        assert!(auth.is_client_error());
        assert!(!auth.is_retryable());

        let app_level = Error::api("Internal service error", 50000);
        assert!(app_level.is_retryable());
    }

    #[test]
    fn test_transport_error_preserves_message() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = Error::transport(cause);

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.message(), "connection refused");
        assert!(err.source().is_some());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_validation_error_is_terminal() {
        let mut errors = ValidationErrors::new();
        errors.add("advertiser_id", "is required");
        let err = Error::validation(errors);

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.message().contains("advertiser_id"));
        assert!(!err.is_retryable());
    }
}
