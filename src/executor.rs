//! The retry loop: sequential attempts with a per-attempt deadline, linear
//! backoff and cooperative cancellation.

use crate::classify::{self, Delivered, Verdict};
use crate::retry::{AttemptContext, RetryPolicy};
use crate::transport::{Transport, TransportRequest};
use crate::{Error, Result};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// A successful call together with how long it took to get there.
#[derive(Debug)]
pub(crate) struct Completed {
    pub delivered: Delivered,
    pub attempts: u32,
    pub latency: Duration,
}

/// Runs `request` until it succeeds, fails terminally, runs out of attempts or
/// is cancelled.
///
/// Attempts never overlap. On cancellation the in-flight transport future is
/// dropped and the loop returns at once without waiting for the transport to
/// acknowledge the abort.
pub(crate) async fn execute(
    transport: &dyn Transport,
    request: &TransportRequest,
    policy: RetryPolicy,
    cancel: &CancellationToken,
) -> Result<Completed> {
    let started = Instant::now();
    let mut ctx = AttemptContext::new();

    loop {
        if cancel.is_cancelled() {
            return Err(cancelled(&ctx));
        }

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            attempt = ctx.attempts(),
            "Executing HTTP request"
        );

        let attempt = tokio::time::timeout(request.timeout, transport.send(request.clone()));
        let verdict = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(cancelled(&ctx)),
            outcome = attempt => match outcome {
                Ok(Ok(response)) => {
                    tracing::info!(
                        status = response.status.as_u16(),
                        latency_ms = started.elapsed().as_millis(),
                        attempt = ctx.attempts(),
                        "Received HTTP response"
                    );
                    classify::classify_response(response)
                }
                Ok(Err(e)) => classify::classify_failure(e),
                Err(_) => Verdict::Retryable(Error::timeout(request.timeout)),
            },
        };

        let failure = match verdict {
            Verdict::Success(delivered) => {
                return Ok(Completed {
                    delivered,
                    attempts: ctx.attempts(),
                    latency: started.elapsed(),
                });
            }
            Verdict::Terminal(error) => return Err(error),
            Verdict::Retryable(error) => error,
        };

        let Some(delay) = policy.delay_after(ctx.index) else {
            tracing::warn!(
                error = %failure,
                attempts = ctx.attempts(),
                "Request failed, no attempts left"
            );
            return Err(failure);
        };

        tracing::warn!(
            error = %failure,
            attempt = ctx.attempts(),
            delay_ms = delay.as_millis(),
            "Request failed, retrying after delay"
        );
        ctx.record_retry(failure, delay);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(cancelled(&ctx)),
            _ = tokio::time::sleep(delay) => {}
        }
        ctx.advance();
    }
}

fn cancelled(ctx: &AttemptContext) -> Error {
    tracing::debug!(
        attempt = ctx.attempts(),
        waited_ms = ctx.waited.as_millis(),
        last_failure = ?ctx.last_failure.as_ref().map(|e| e.to_string()),
        "Request cancelled"
    );
    Error::cancelled()
}
