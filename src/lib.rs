//! # tiktok-business-api - a typed, retry-aware client for the TikTok Business API
//!
//! Every endpoint is declared once in the [`catalog`] with its method, path and
//! input/output shapes. The [`Client`] turns those declarations into typed
//! methods grouped by resource, and runs each call through the same pipeline:
//! input validation, an authenticated request, a bounded retry loop with
//! per-attempt timeouts and linear backoff, response classification and
//! output validation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tiktok_business_api::Client;
//! use tiktok_business_api::catalog::pixel::{PixelCategory, PixelCreateInput, PixelListInput};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tiktok_business_api::Error> {
//!     let client = Client::builder()
//!         .access_token("your-access-token")
//!         .timeout(Duration::from_secs(30))
//!         .max_attempts(3)
//!         .retry_delay(Duration::from_secs(1))
//!         .build()?;
//!
//!     let input = PixelCreateInput::new("7000000000000000000", "Checkout pixel")
//!         .category(PixelCategory::OnlineStore);
//!     let created = client.pixel().create(&input).await?;
//!     println!("request_id={:?} data={:?}", created.request_id, created.data);
//!
//!     let pixels = client.pixel().list(&PixelListInput::new("7000000000000000000")).await?;
//!     println!("{} pixels in {:?}", pixels.list.len(), pixels.latency);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failure is an [`Error`]. Inspect [`Error::kind`] and [`Error::code`]
//! to tell them apart:
//!
//! ```no_run
//! use tiktok_business_api::{Client, ErrorKind};
//! use tiktok_business_api::catalog::app::AppListInput;
//!
//! # async fn example() -> Result<(), tiktok_business_api::Error> {
//! # let client = Client::new("token")?;
//! match client.app().list(&AppListInput::new("7000000000000000000")).await {
//!     Ok(apps) => println!("{} apps", apps.list.len()),
//!     Err(e) if e.kind() == ErrorKind::Validation => eprintln!("bad input: {}", e),
//!     Err(e) if e.is_client_error() => {
//!         eprintln!("rejected with code {:?} (request {:?})", e.code(), e.request_id());
//!     }
//!     Err(e) => eprintln!("gave up after retries: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Per-call options and cancellation
//!
//! ```no_run
//! use tiktok_business_api::{Client, RequestOptions};
//! use tiktok_business_api::catalog::report::ReportTaskCheckInput;
//! use tokio_util::sync::CancellationToken;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), tiktok_business_api::Error> {
//! # let client = Client::new("token")?;
//! let cancel = CancellationToken::new();
//! let options = RequestOptions::new()
//!     .access_token("token-of-another-advertiser")
//!     .timeout(Duration::from_secs(5))
//!     .cancellation(cancel.clone());
//!
//! let input = ReportTaskCheckInput {
//!     advertiser_id: "7000000000000000000".to_string(),
//!     task_id: "task-1".to_string(),
//! };
//! let status = client.report().task_check_with(&input, options).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod catalog;
mod classify;
mod client;
pub mod config;
mod error;
mod executor;
pub mod rate_limit;
mod request;
mod response;
pub mod retry;
pub mod transport;
pub mod validation;

pub use classify::ApiEnvelope;
pub use client::{Client, ClientBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestOptions, ACCESS_TOKEN_HEADER};
pub use response::Response;
pub use retry::RetryPolicy;
