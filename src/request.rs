//! Builds authenticated, transport-ready requests.

use crate::catalog::Endpoint;
use crate::config::ClientConfig;
use crate::transport::TransportRequest;
use crate::{Error, Result};
use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde_json::Value;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Header carrying the access token.
pub const ACCESS_TOKEN_HEADER: &str = "Access-Token";

/// Per-call overrides.
///
/// # Examples
///
/// ```
/// use tiktok_business_api::RequestOptions;
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
///
/// # fn example() -> Result<(), tiktok_business_api::Error> {
/// let cancel = CancellationToken::new();
/// let options = RequestOptions::new()
///     .access_token("token-for-another-advertiser")
///     .header("X-Debug-Trace", "1")?
///     .timeout(Duration::from_secs(5))
///     .cancellation(cancel.clone());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Used instead of the client's token for this call only.
    pub access_token: Option<String>,
    /// Applied last, so they win over every other header.
    pub headers: HeaderMap,
    /// Used instead of the client's default timeout for each attempt.
    pub timeout: Option<Duration>,
    /// Aborts the call, including any backoff wait, when cancelled.
    pub cancellation: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Adds a header for this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::configuration(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

/// Builds the request for one call.
///
/// Headers are layered from lowest to highest precedence: client defaults,
/// `Access-Token`, `Content-Type`, `User-Agent`, then the per-call headers.
/// The access token is read from `config` here, once per call.
pub(crate) fn build(
    config: &ClientConfig,
    endpoint: &Endpoint,
    input: &Value,
    options: &RequestOptions,
) -> Result<TransportRequest> {
    let method = Method::from(endpoint.method);
    let mut url = endpoint_url(&config.base_url, endpoint.path)?;

    let body = if method == Method::GET {
        append_query(&mut url, input);
        None
    } else {
        Some(input.to_string())
    };

    let mut headers = config.default_headers.clone();

    let token = match &options.access_token {
        Some(token) => HeaderValue::try_from(token.as_str()),
        None => HeaderValue::try_from(&*config.access_token()),
    };
    let mut token =
        token.map_err(|_| Error::configuration("Access token is not a valid header value"))?;
    token.set_sensitive(true);
    headers.insert(ACCESS_TOKEN_HEADER, token);

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let user_agent = HeaderValue::try_from(config.user_agent.as_str())
        .map_err(|e| Error::configuration(format!("Invalid user agent: {}", e)))?;
    headers.insert(USER_AGENT, user_agent);

    for (name, value) in &options.headers {
        headers.insert(name.clone(), value.clone());
    }

    Ok(TransportRequest {
        method,
        url,
        headers,
        body,
        timeout: options.timeout.unwrap_or(config.timeout),
    })
}

fn endpoint_url(base: &Url, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| Error::configuration(format!("Invalid URL {}: {}", joined, e)))
}

/// Encodes a flat JSON object as query parameters.
///
/// Strings go in verbatim, arrays and objects as compact JSON, which is what
/// the API expects for list filters such as `advertiser_ids=["1","2"]`.
fn append_query(url: &mut Url, input: &Value) {
    let Value::Object(fields) = input else {
        return;
    };

    let pairs: Vec<(&str, String)> = fields
        .iter()
        .filter_map(|(key, value)| {
            let encoded = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
                    value.to_string()
                }
            };
            Some((key.as_str(), encoded))
        })
        .collect();

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
}
