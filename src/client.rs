//! The client facade and its builder.
//!
//! [`Client`] is the entry point: it owns the shared [`ClientConfig`], exposes
//! the operation groups (`client.pixel()`, `client.campaign()`, ...) and runs
//! every call through validation, request building, the retry loop and output
//! validation.

use crate::api::{
    AdApi, AdgroupApi, AdvertiserApi, AppApi, BusinessCenterApi, CampaignApi, PixelApi, ReportApi,
};
use crate::catalog::{self, Endpoint, Operation};
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::request::{self, RequestOptions};
use crate::retry::RetryPolicy;
use crate::transport::{ReqwestTransport, Transport};
use crate::validation;
use crate::{executor, Error, Response, Result};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// A TikTok Business API client.
///
/// Cloning is cheap and clones share configuration, including the access
/// token: [`Client::set_access_token`] on one clone is seen by all of them.
/// Any number of calls may run concurrently on the same client.
///
/// # Examples
///
/// ```no_run
/// use tiktok_business_api::Client;
/// use tiktok_business_api::catalog::campaign::{CampaignCreateInput, ObjectiveType, BudgetMode};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), tiktok_business_api::Error> {
/// let client = Client::builder()
///     .access_token("your-access-token")
///     .timeout(Duration::from_secs(10))
///     .max_attempts(5)
///     .build()?;
///
/// let input = CampaignCreateInput::new("7000000000000000000", "Spring launch", ObjectiveType::Traffic)
///     .budget(500.0, BudgetMode::Day);
/// let created = client.campaign().create(&input).await?;
/// if let Some(campaign) = &created.data {
///     println!("Created campaign {}", campaign.campaign_id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientConfig>,
}

impl Client {
    /// Creates a new `ClientBuilder`.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client with default settings and the given access token.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::builder().access_token(access_token).build()
    }

    /// The shared configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner
    }

    /// The access token subsequent calls will use.
    pub fn access_token(&self) -> String {
        self.inner.access_token().to_string()
    }

    /// Replaces the access token for every call built after this returns.
    ///
    /// Calls already in flight keep the token they were built with.
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.inner.set_access_token(token);
        tracing::debug!("Access token replaced");
    }

    pub fn advertiser(&self) -> AdvertiserApi<'_> {
        AdvertiserApi::new(self)
    }

    pub fn app(&self) -> AppApi<'_> {
        AppApi::new(self)
    }

    pub fn pixel(&self) -> PixelApi<'_> {
        PixelApi::new(self)
    }

    pub fn campaign(&self) -> CampaignApi<'_> {
        CampaignApi::new(self)
    }

    pub fn adgroup(&self) -> AdgroupApi<'_> {
        AdgroupApi::new(self)
    }

    pub fn ad(&self) -> AdApi<'_> {
        AdApi::new(self)
    }

    pub fn business_center(&self) -> BusinessCenterApi<'_> {
        BusinessCenterApi::new(self)
    }

    pub fn report(&self) -> ReportApi<'_> {
        ReportApi::new(self)
    }

    /// Runs a typed operation.
    ///
    /// The operation groups are thin wrappers over this.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tiktok_business_api::{Client, RequestOptions};
    /// use tiktok_business_api::catalog::report::{self, ReportTaskCheckInput};
    ///
    /// # async fn example() -> Result<(), tiktok_business_api::Error> {
    /// let client = Client::new("token")?;
    /// let input = ReportTaskCheckInput {
    ///     advertiser_id: "7000000000000000000".to_string(),
    ///     task_id: "task-1".to_string(),
    /// };
    /// let status = client.execute::<report::TaskCheck>(&input, RequestOptions::new()).await?;
    /// println!("{:?}", status.data);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute<O: Operation>(
        &self,
        input: &O::Input,
        options: RequestOptions,
    ) -> Result<Response<O::Output>> {
        let input = serde_json::to_value(input).map_err(Error::serialization)?;
        let response = self.dispatch(O::ENDPOINT, &input, options).await?;

        let data = validation::decode::<O::Output>(&response.data).map_err(|errors| {
            Error::validation(errors)
                .with_status(response.status)
                .with_request_id(response.request_id.clone())
        })?;
        Ok(response.map(|_| data))
    }

    /// Runs any catalog operation by its dotted name with untyped input.
    ///
    /// The input is still validated against the operation's declared shape.
    /// The output is checked against its declared shape too, but returned
    /// exactly as the server sent it.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tiktok_business_api::{Client, RequestOptions};
    /// use serde_json::json;
    ///
    /// # async fn example() -> Result<(), tiktok_business_api::Error> {
    /// let client = Client::new("token")?;
    /// let response = client
    ///     .call("pixel.list", json!({ "advertiser_id": "7000000000000000000" }), RequestOptions::new())
    ///     .await?;
    /// println!("{}", response.data);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if no operation has that name.
    pub async fn call(
        &self,
        name: &str,
        input: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let endpoint = catalog::find(name)
            .ok_or_else(|| Error::configuration(format!("Unknown operation: {}", name)))?;
        self.dispatch(endpoint, &input, options).await
    }

    async fn dispatch(
        &self,
        endpoint: &Endpoint,
        input: &Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let input = (endpoint.input)(input).map_err(|errors| {
            tracing::warn!(
                operation = endpoint.name,
                error = %errors,
                "Input validation failed"
            );
            Error::validation(errors)
        })?;

        let request = request::build(&self.inner, endpoint, &input, &options)?;
        let cancel = options.cancellation.unwrap_or_default();

        let completed = executor::execute(
            self.inner.transport.as_ref(),
            &request,
            self.inner.retry,
            &cancel,
        )
        .await?;
        let delivered = completed.delivered;

        // Checked only; callers get the payload exactly as the server sent it.
        (endpoint.output)(&delivered.data).map_err(|errors| {
            tracing::error!(
                operation = endpoint.name,
                error = %errors,
                request_id = ?delivered.request_id,
                "Response does not match the declared output"
            );
            Error::validation(errors)
                .with_status(delivered.status)
                .with_request_id(delivered.request_id.clone())
        })?;

        Ok(Response {
            data: delivered.data,
            request_id: delivered.request_id,
            message: delivered.message,
            status: delivered.status,
            headers: delivered.headers,
            latency: completed.latency,
            attempts: completed.attempts,
        })
    }
}

/// Builder for a [`Client`].
///
/// Only the access token is required.
///
/// # Examples
///
/// ```no_run
/// use tiktok_business_api::{ClientBuilder, RetryPolicy};
/// use std::time::Duration;
///
/// # fn example() -> Result<(), tiktok_business_api::Error> {
/// let client = ClientBuilder::new()
///     .access_token("your-access-token")
///     .base_url("https://sandbox-ads.tiktok.com/open_api/v1.3")?
///     .timeout(Duration::from_secs(15))
///     .retry_policy(RetryPolicy::new(4, Duration::from_millis(250)))
///     .default_header("X-Debug-Trace", "1")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    access_token: Option<String>,
    base_url: Option<Url>,
    timeout: Duration,
    retry: RetryPolicy,
    default_headers: HeaderMap,
    user_agent: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            access_token: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
            default_headers: HeaderMap::new(),
            user_agent: None,
            transport: None,
        }
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the base URL every endpoint path is appended to.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(url.as_ref())
            .map_err(|e| Error::configuration(format!("Invalid base URL: {}", e)))?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Adds a header sent with every request. Per-call headers and the
    /// headers the client sets itself take precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::configuration(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Sets the total number of attempts, including the first.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.retry.max_attempts = attempts;
        self
    }

    /// Sets the base unit of the linear backoff.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry.base_delay = delay;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replaces the HTTP transport. Defaults to [`ReqwestTransport`].
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if no access token was provided or `max_attempts` is 0.
    pub fn build(self) -> Result<Client> {
        let access_token = self
            .access_token
            .ok_or_else(|| Error::configuration("Access token is required"))?;

        if self.retry.max_attempts == 0 {
            return Err(Error::configuration("max_attempts must be at least 1"));
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| Error::configuration(format!("Invalid base URL: {}", e)))?,
        };

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(ReqwestTransport::new()));

        let config = ClientConfig::new(
            access_token,
            base_url,
            transport,
            self.timeout,
            self.retry,
            self.default_headers,
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );
        tracing::debug!(config = ?config, "Client built");

        Ok(Client {
            inner: Arc::new(config),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
