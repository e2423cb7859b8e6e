//! Retry policy and per-call attempt bookkeeping.

use crate::Error;
use std::time::Duration;

/// How many times a call is attempted and how long to wait in between.
///
/// Backoff is linear: after the failed attempt with 0-based index `i`, the
/// executor waits `base_delay * (i + 1)` before trying again.
///
/// # Examples
///
/// ```
/// use tiktok_business_api::RetryPolicy;
/// use std::time::Duration;
///
/// // Three attempts total: wait 500ms after the first failure, 1s after the second.
/// let policy = RetryPolicy::new(3, Duration::from_millis(500));
///
/// assert_eq!(policy.delay_after(0), Some(Duration::from_millis(500)));
/// assert_eq!(policy.delay_after(1), Some(Duration::from_secs(1)));
/// assert_eq!(policy.delay_after(2), None);
///
/// // A single attempt never retries.
/// assert_eq!(RetryPolicy::no_retry().delay_after(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first. Must be at least 1.
    pub max_attempts: u32,
    /// Unit of the linear backoff. Zero means retry immediately.
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// A policy that makes exactly one attempt.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// The wait after the failed attempt `attempt_index` (0-based), or `None`
    /// when that attempt was the last one allowed.
    pub fn delay_after(&self, attempt_index: u32) -> Option<Duration> {
        if attempt_index.saturating_add(1) >= self.max_attempts {
            return None;
        }
        Some(self.base_delay.saturating_mul(attempt_index + 1))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

/// State of one call's retry loop.
///
/// Created when the executor starts a call and dropped when the loop exits.
#[derive(Debug, Default)]
pub(crate) struct AttemptContext {
    /// 0-based index of the attempt in progress.
    pub index: u32,
    /// Sum of the backoff waits scheduled so far.
    pub waited: Duration,
    /// The failure observed by the most recent attempt.
    pub last_failure: Option<Error>,
}

impl AttemptContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attempts issued so far, counting the one in progress.
    pub fn attempts(&self) -> u32 {
        self.index + 1
    }

    /// Records a retryable failure and the wait scheduled before the next attempt.
    pub fn record_retry(&mut self, failure: Error, delay: Duration) {
        self.waited += delay;
        self.last_failure = Some(failure);
    }

    /// Moves on to the next attempt.
    pub fn advance(&mut self) {
        self.index += 1;
    }
}
