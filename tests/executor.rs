//! Retry loop properties, driven through a counting closure transport.

use http::StatusCode;
use serde_json::json;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tiktok_business_api::catalog::campaign::CampaignGetInput;
use tiktok_business_api::catalog::pixel::{PixelCreateInput, PixelListInput};
use tiktok_business_api::transport::{transport_fn, TransportError, TransportRequest, TransportResponse};
use tiktok_business_api::{Client, ErrorKind, RequestOptions, ACCESS_TOKEN_HEADER};
use tokio_util::sync::CancellationToken;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A client whose transport answers with `respond(call_index)` and counts calls.
fn counting_client<R>(max_attempts: u32, delay: Duration, respond: R) -> (Client, Arc<AtomicU32>)
where
    R: Fn(u32) -> Result<TransportResponse, TransportError> + Send + Sync + 'static,
{
    init_tracing();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let respond = Arc::new(respond);

    let transport = transport_fn(move |_request: TransportRequest| {
        let index = counter.fetch_add(1, Ordering::SeqCst);
        let respond = Arc::clone(&respond);
        async move { (*respond)(index) }
    });

    let client = Client::builder()
        .access_token("client-token")
        .max_attempts(max_attempts)
        .retry_delay(delay)
        .transport(transport)
        .build()
        .unwrap();
    (client, calls)
}

fn status(code: u16) -> Result<TransportResponse, TransportError> {
    Ok(TransportResponse::new(StatusCode::from_u16(code).unwrap(), ""))
}

fn success() -> Result<TransportResponse, TransportError> {
    Ok(TransportResponse::from_json(
        StatusCode::OK,
        &json!({ "code": 0, "message": "OK", "data": { "list": [] } }),
    ))
}

#[tokio::test]
async fn test_invalid_input_never_reaches_transport() {
    let (client, calls) = counting_client(3, Duration::ZERO, |_| success());

    let err = client
        .pixel()
        .create(&PixelCreateInput::new("42", ""))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.message().contains("Pixel name cannot be empty"));

    let err = client
        .call("pixel.create", json!({ "advertiser_id": "42" }), RequestOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.message().contains("pixel_name"));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_always_retryable_uses_whole_budget() {
    let (client, calls) = counting_client(4, Duration::ZERO, |_| status(503));

    let err = client
        .pixel()
        .list(&PixelListInput::new("42"))
        .await
        .unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(err.code(), Some(503));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_single_attempt_means_no_retry() {
    let (client, calls) = counting_client(1, Duration::ZERO, |_| status(502));

    client
        .pixel()
        .list(&PixelListInput::new("42"))
        .await
        .unwrap_err();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_exhaustion_returns_last_failure() {
    let (client, _) = counting_client(2, Duration::ZERO, |i| status(if i == 0 { 500 } else { 503 }));

    let err = client
        .pixel()
        .list(&PixelListInput::new("42"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(503));
}

#[tokio::test]
async fn test_linear_backoff_before_success() {
    let delay = Duration::from_millis(50);
    let (client, calls) = counting_client(3, delay, |i| if i < 2 { status(500) } else { success() });

    let started = Instant::now();
    let response = client
        .campaign()
        .get(&CampaignGetInput::new("42"))
        .await
        .unwrap();

    assert!(started.elapsed() >= delay + delay * 2);
    assert!(response.latency >= delay * 3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(response.attempts, 3);
}

#[tokio::test]
async fn test_client_error_code_in_ok_response_is_terminal() {
    let (client, calls) = counting_client(3, Duration::ZERO, |_| {
        Ok(TransportResponse::from_json(
            StatusCode::OK,
            &json!({ "code": 404, "message": "Not found" }),
        ))
    });

    let err = client
        .pixel()
        .list(&PixelListInput::new("42"))
        .await
        .unwrap_err();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(err.code(), Some(404));
}

#[tokio::test]
async fn test_transport_failures_are_retried() {
    let (client, calls) = counting_client(3, Duration::ZERO, |i| {
        if i == 0 {
            Err(TransportError::Other("connection refused".to_string()))
        } else {
            success()
        }
    });

    let response = client
        .pixel()
        .list(&PixelListInput::new("42"))
        .await
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(response.was_retried());
}

#[tokio::test]
async fn test_transport_error_message_is_preserved() {
    let (client, _) = counting_client(1, Duration::ZERO, |_| {
        Err(TransportError::Other("connection refused".to_string()))
    });

    let err = client
        .pixel()
        .list(&PixelListInput::new("42"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.message(), "connection refused");
}

#[tokio::test]
async fn test_cancel_during_backoff_stops_retrying() {
    let (client, calls) = counting_client(3, Duration::from_secs(10), |_| status(500));

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let err = client
        .pixel()
        .list_with(&PixelListInput::new("42"), RequestOptions::new().cancellation(cancel))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(5));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cancel_during_attempt_returns_immediately() {
    init_tracing();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let transport = transport_fn(move |_request: TransportRequest| {
        counter.fetch_add(1, Ordering::SeqCst);
        async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            success()
        }
    });

    let client = Client::builder()
        .access_token("client-token")
        .max_attempts(3)
        .retry_delay(Duration::ZERO)
        .transport(transport)
        .build()
        .unwrap();

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(30)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let err = client
        .pixel()
        .list_with(&PixelListInput::new("42"), RequestOptions::new().cancellation(cancel))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cancelled_before_start_makes_no_attempt() {
    let (client, calls) = counting_client(3, Duration::ZERO, |_| success());

    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = client
        .pixel()
        .list_with(&PixelListInput::new("42"), RequestOptions::new().cancellation(cancel))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_slow_transport_times_out_each_attempt() {
    init_tracing();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let transport = transport_fn(move |_request: TransportRequest| {
        counter.fetch_add(1, Ordering::SeqCst);
        async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            success()
        }
    });

    let client = Client::builder()
        .access_token("client-token")
        .max_attempts(2)
        .retry_delay(Duration::ZERO)
        .timeout(Duration::from_millis(20))
        .transport(transport)
        .build()
        .unwrap();

    let started = Instant::now();
    let err = client
        .pixel()
        .list(&PixelListInput::new("42"))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert!(err.is_retryable());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_token_override_does_not_touch_client() {
    init_tracing();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let transport = transport_fn(move |request: TransportRequest| {
        let token = request.headers[ACCESS_TOKEN_HEADER].to_str().unwrap().to_string();
        recorder.lock().unwrap().push(token);
        async { success() }
    });

    let client = Client::builder()
        .access_token("client-token")
        .transport(transport)
        .build()
        .unwrap();

    let options = RequestOptions::new().access_token("call-token");
    client
        .pixel()
        .list_with(&PixelListInput::new("42"), options)
        .await
        .unwrap();
    client.pixel().list(&PixelListInput::new("42")).await.unwrap();

    assert_eq!(client.access_token(), "client-token");
    assert_eq!(*seen.lock().unwrap(), ["call-token", "client-token"]);
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let (client, calls) = counting_client(1, Duration::ZERO, |_| success());

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.pixel().list(&PixelListInput::new("42")).await })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }
    assert_eq!(calls.load(Ordering::SeqCst), 8);
}
