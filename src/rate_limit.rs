//! Rate limit hints parsed from failing responses.
//!
//! The hints are attached to [`Error`](crate::Error) so callers can decide
//! when to try again. They never alter the client's own retry schedule.

use http::HeaderMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rate limit information carried by a response's headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// How long the server asked us to wait (`Retry-After`).
    pub retry_after: Option<Duration>,
    /// When the current window resets (`X-RateLimit-Reset` / `RateLimit-Reset`).
    pub reset_at: Option<SystemTime>,
    /// Requests left in the current window (`X-RateLimit-Remaining`).
    pub remaining: Option<u64>,
}

impl RateLimitInfo {
    /// Parses the rate limit headers, returning `None` when none are present.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let info = Self {
            retry_after: header_str(headers, "retry-after").and_then(parse_retry_after),
            reset_at: header_str(headers, "x-ratelimit-reset")
                .or_else(|| header_str(headers, "ratelimit-reset"))
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| UNIX_EPOCH + Duration::from_secs(secs)),
            remaining: header_str(headers, "x-ratelimit-remaining").and_then(|v| v.parse().ok()),
        };

        if info.retry_after.is_none() && info.reset_at.is_none() && info.remaining.is_none() {
            None
        } else {
            Some(info)
        }
    }

    /// The suggested wait before the next call, capped at `max_wait`.
    pub fn delay(&self, max_wait: Duration) -> Option<Duration> {
        let wait = match (self.retry_after, self.reset_at) {
            (Some(retry_after), _) => retry_after,
            (None, Some(reset_at)) => reset_at.duration_since(SystemTime::now()).ok()?,
            (None, None) => return None,
        };
        Some(wait.min(max_wait))
    }

    /// Returns `true` if the window is exhausted or the server asked us to back off.
    pub fn is_rate_limited(&self) -> bool {
        self.retry_after.is_some() || self.remaining == Some(0)
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name)?.to_str().ok()
}

/// `Retry-After` is either delay-seconds or an HTTP date.
fn parse_retry_after(value: &str) -> Option<Duration> {
    if let Ok(seconds) = value.trim().parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }
    httpdate::parse_http_date(value)
        .ok()?
        .duration_since(SystemTime::now())
        .ok()
}
