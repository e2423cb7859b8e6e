//! The raw HTTP primitive the executor drives.
//!
//! The client never talks to the network directly. It hands a fully built
//! [`TransportRequest`] to a [`Transport`] and classifies whatever comes back.
//! [`ReqwestTransport`] is the default; [`transport_fn`] adapts an async
//! closure, which is handy for tests and for routing through custom stacks.

use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// A transport-ready request.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// JSON body for write operations; `None` for reads.
    pub body: Option<String>,
    /// Deadline for this attempt. The executor enforces it as well.
    pub timeout: Duration,
}

/// What the transport received.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Builds a response whose body is the serialized `value`.
    pub fn from_json(status: StatusCode, value: &Value) -> Self {
        Self::new(status, value.to_string())
    }

    /// Returns `true` for 2xx statuses.
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    /// Parses the body as JSON.
    pub fn json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

/// A failure below the HTTP protocol layer.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// The `reqwest` stack failed (DNS, connect, TLS, body read, its own timeout).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Any other failure reported by a custom transport.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Returns `true` if the failure was the transport's own deadline firing.
    pub fn is_timeout(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_timeout(),
            TransportError::Io(e) => e.kind() == std::io::ErrorKind::TimedOut,
            TransportError::Other(_) => false,
        }
    }
}

/// Sends one HTTP request and returns the complete response.
///
/// Implementations must be cancel-safe: the executor drops the returned future
/// when the call is cancelled or the attempt's deadline passes.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// The default transport, backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already configured `reqwest::Client` (proxies, TLS roots, pool tuning).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers)
            .timeout(request.timeout);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

/// A [`Transport`] backed by an async closure. Build one with [`transport_fn`].
#[derive(Clone)]
pub struct FnTransport<F> {
    f: F,
}

/// Adapts an async closure into a [`Transport`].
///
/// # Examples
///
/// ```
/// use tiktok_business_api::transport::{transport_fn, TransportResponse};
/// use http::StatusCode;
/// use serde_json::json;
///
/// let transport = transport_fn(|_request| async {
///     Ok(TransportResponse::from_json(StatusCode::OK, &json!({ "code": 0, "data": {} })))
/// });
/// ```
pub fn transport_fn<F, Fut>(f: F) -> FnTransport<F>
where
    F: Fn(TransportRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<TransportResponse, TransportError>> + Send + 'static,
{
    FnTransport { f }
}

#[async_trait]
impl<F, Fut> Transport for FnTransport<F>
where
    F: Fn(TransportRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<TransportResponse, TransportError>> + Send + 'static,
{
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        (self.f)(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_helpers() {
        let value = json!({ "code": 0, "data": { "task_id": "t-1" } });
        let response = TransportResponse::from_json(StatusCode::OK, &value);

        assert!(response.ok());
        assert_eq!(response.json().unwrap(), value);
    }

    #[test]
    fn test_non_json_body() {
        let response = TransportResponse::new(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert!(!response.ok());
        assert!(response.json().is_err());
    }

    #[test]
    fn test_io_timeout_is_timeout() {
        let err = TransportError::from(std::io::Error::new(std::io::ErrorKind::TimedOut, "slow"));
        assert!(err.is_timeout());
        assert!(!TransportError::Other("refused".to_string()).is_timeout());
    }
}
