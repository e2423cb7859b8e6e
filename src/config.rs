//! Per-client configuration shared by every call made through a [`Client`](crate::Client).

use crate::retry::RetryPolicy;
use crate::transport::Transport;
use http::HeaderMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Production endpoint of the Business API, version 1.3.
pub const DEFAULT_BASE_URL: &str = "https://business-api.tiktok.com/open_api/v1.3";

/// Applied to every attempt unless a call overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sent as `User-Agent` unless the builder overrides it.
pub const DEFAULT_USER_AGENT: &str = concat!("TikTok-Business-API-SDK/", env!("CARGO_PKG_VERSION"));

/// Configuration owned by a client and read by every call.
///
/// Everything here is fixed at build time except the access token, which can
/// be swapped with [`ClientConfig::set_access_token`] for token refresh.
pub struct ClientConfig {
    access_token: RwLock<Arc<str>>,
    pub(crate) base_url: Url,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) timeout: Duration,
    pub(crate) retry: RetryPolicy,
    pub(crate) default_headers: HeaderMap,
    pub(crate) user_agent: String,
}

impl ClientConfig {
    pub(crate) fn new(
        access_token: String,
        base_url: Url,
        transport: Arc<dyn Transport>,
        timeout: Duration,
        retry: RetryPolicy,
        default_headers: HeaderMap,
        user_agent: String,
    ) -> Self {
        Self {
            access_token: RwLock::new(Arc::from(access_token)),
            base_url,
            transport,
            timeout,
            retry,
            default_headers,
            user_agent,
        }
    }

    /// A snapshot of the current access token.
    pub fn access_token(&self) -> Arc<str> {
        Arc::clone(&self.access_token.read())
    }

    /// Replaces the access token for all subsequent calls.
    ///
    /// Calls already past request construction keep the token they captured.
    pub fn set_access_token(&self, token: impl Into<String>) {
        *self.access_token.write() = Arc::from(token.into());
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("default_headers", &self.default_headers)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
