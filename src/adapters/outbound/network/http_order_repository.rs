use crate::order_listing::domain::Order;
use crate::ports::outbound::OrderRepository;
use crate::shared::error::OrderError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;

/// Per-request timeout
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Attempts made before giving up on a transient failure
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Outcome of a single request; only transient failures are retried
enum Attempt {
    Done(Vec<Order>),
    Transient(String),
}

/// HttpOrderRepository adapter for a remote order service
///
/// Issues `GET {base_url}/orders` and expects a JSON array of orders.
/// Timeouts and retries are handled here: connection failures, timeouts
/// and 5xx responses are retried with linear back-off, while 4xx
/// responses and undecodable bodies fail immediately.
pub struct HttpOrderRepository {
    client: reqwest::Client,
    endpoint: Url,
    max_attempts: u32,
}

impl HttpOrderRepository {
    /// Creates a repository for the service at `base_url`
    ///
    /// # Errors
    /// Returns an error if the URL cannot be parsed, is not http(s), or
    /// the HTTP client cannot be built
    pub fn new(base_url: &str) -> Result<Self> {
        let endpoint = Self::orders_endpoint(base_url)?;

        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Overrides the number of attempts (minimum 1)
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn orders_endpoint(base_url: &str) -> Result<Url> {
        let invalid = |reason: String| OrderError::InvalidSource {
            source_name: base_url.to_string(),
            reason,
        };

        let mut url =
            Url::parse(base_url).map_err(|e| invalid(format!("Not a valid URL: {}", e)))?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("Unsupported URL scheme '{}'", other)).into()),
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("Base URL must not carry a query or fragment".to_string()).into());
        }

        url.path_segments_mut()
            .map_err(|_| invalid("Base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .push("orders");

        Ok(url)
    }

    async fn fetch_once(&self) -> Result<Attempt> {
        let response = match self.client.get(self.endpoint.clone()).send().await {
            Ok(response) => response,
            Err(e) => return Ok(Attempt::Transient(e.to_string())),
        };

        let status = response.status();
        if status.is_server_error() {
            return Ok(Attempt::Transient(Self::describe_status(status)));
        }
        if !status.is_success() {
            return Err(self.unavailable(Self::describe_status(status)));
        }

        let orders: Vec<Order> = response
            .json()
            .await
            .map_err(|e| self.unavailable(format!("Invalid response body: {}", e)))?;

        Ok(Attempt::Done(orders))
    }

    fn describe_status(status: StatusCode) -> String {
        format!("Order service returned status code {}", status)
    }

    fn unavailable(&self, details: String) -> anyhow::Error {
        OrderError::RepositoryUnavailable {
            url: self.endpoint.to_string(),
            details,
        }
        .into()
    }
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    async fn get_orders(&self) -> Result<Vec<Order>> {
        let mut last_failure = String::new();

        for attempt in 1..=self.max_attempts {
            match self.fetch_once().await? {
                Attempt::Done(orders) => return Ok(orders),
                Attempt::Transient(reason) => {
                    last_failure = reason;
                    if attempt < self.max_attempts {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(self.unavailable(format!(
            "{} (after {} attempt(s))",
            last_failure, self.max_attempts
        )))
    }
}
