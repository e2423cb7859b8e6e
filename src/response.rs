//! Successful call results, with the envelope details and call metadata kept
//! alongside the validated payload.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// The result of a successful call.
///
/// `data` is the envelope's `data` field after output validation. The rest
/// describes how the call went: the API's request id (quote it to support),
/// the HTTP status and headers of the final attempt, the total latency
/// including backoff waits, and how many attempts it took.
///
/// `Response<T>` dereferences to `T`, so fields of the payload can be read
/// directly.
///
/// # Examples
///
/// ```no_run
/// use tiktok_business_api::Client;
/// use tiktok_business_api::catalog::pixel::PixelListInput;
///
/// # async fn example() -> Result<(), tiktok_business_api::Error> {
/// let client = Client::new("token")?;
/// let response = client.pixel().list(&PixelListInput::new("7000000000000000000")).await?;
///
/// for pixel in &response.list {
///     println!("{} ({})", pixel.pixel_name, pixel.pixel_id);
/// }
/// println!("request_id={:?} took {:?}", response.request_id, response.latency);
/// if response.was_retried() {
///     println!("needed {} attempts", response.attempts);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The validated payload.
    pub data: T,

    /// The envelope's `request_id`, when the API sent one.
    pub request_id: Option<String>,

    /// The envelope's `message`, usually `"OK"`.
    pub message: Option<String>,

    /// HTTP status of the successful attempt.
    pub status: StatusCode,

    /// Headers of the successful attempt.
    pub headers: HeaderMap,

    /// Time from the first attempt until the successful response, including
    /// every backoff wait.
    pub latency: Duration,

    /// Attempts made, `1` when the first one succeeded.
    pub attempts: u32,
}

impl<T> Response<T> {
    /// Maps the payload, keeping the metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tiktok_business_api::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response {
    ///     data: vec!["a", "b"],
    ///     request_id: Some("2024011512000001".to_string()),
    ///     message: Some("OK".to_string()),
    ///     status: StatusCode::OK,
    ///     headers: HeaderMap::new(),
    ///     latency: Duration::from_millis(80),
    ///     attempts: 1,
    /// };
    ///
    /// let count = response.map(|list| list.len());
    /// assert_eq!(count.data, 2);
    /// assert_eq!(count.request_id.as_deref(), Some("2024011512000001"));
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            request_id: self.request_id,
            message: self.message,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
            attempts: self.attempts,
        }
    }

    /// Returns `true` if the call needed more than one attempt.
    pub fn was_retried(&self) -> bool {
        self.attempts > 1
    }

    /// Returns a response header as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Consumes the response, returning only the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn response(attempts: u32) -> Response<u32> {
        let mut headers = HeaderMap::new();
        headers.insert("x-tt-logid", HeaderValue::from_static("abc123"));
        Response {
            data: 7,
            request_id: None,
            message: None,
            status: StatusCode::OK,
            headers,
            latency: Duration::from_millis(5),
            attempts,
        }
    }

    #[test]
    fn test_was_retried() {
        assert!(!response(1).was_retried());
        assert!(response(3).was_retried());
    }

    #[test]
    fn test_header_lookup() {
        let response = response(1);
        assert_eq!(response.header("X-Tt-Logid"), Some("abc123"));
        assert_eq!(response.header("missing"), None);
    }

    #[test]
    fn test_deref_to_payload() {
        let response = response(1);
        assert_eq!(*response + 1, 8);
        assert_eq!(response.into_data(), 7);
    }
}
