//! HTTP transport with retry and rate limiting
//!
//! Handles:
//! - Automatic retries with configurable backoff
//! - BGG's "202 Accepted, come back later" queueing and 429 throttling
//! - Window based rate limiting shared across concurrent calls
//! - A cap on requests in flight at once; excess fetches wait for a slot

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use super::Transport;
use crate::config::HttpConfig;
use crate::error::{Error, Result};
use crate::types::BackoffType;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries
    pub max_retries: u32,
    /// Status codes that trigger a retry
    pub retry_statuses: Vec<u16>,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// User agent string
    pub user_agent: String,
    /// Requests allowed in flight at once
    pub max_concurrent_requests: usize,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self::from(&HttpConfig::default())
    }
}

impl From<&HttpConfig> for HttpTransportConfig {
    fn from(config: &HttpConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_seconds),
            max_retries: config.max_retries,
            retry_statuses: config.retry_statuses.clone(),
            initial_backoff: Duration::from_millis(config.retry_backoff.initial_ms),
            max_backoff: Duration::from_millis(config.retry_backoff.max_ms),
            backoff_type: config.retry_backoff.backoff_type,
            rate_limit: RateLimiterConfig::from_config(&config.rate_limit),
            user_agent: config.user_agent.clone(),
            max_concurrent_requests: config.max_concurrent_requests,
        }
    }
}

impl HttpTransportConfig {
    /// Create a new config builder
    pub fn builder() -> HttpTransportConfigBuilder {
        HttpTransportConfigBuilder::default()
    }
}

/// Builder for HTTP transport config
#[derive(Default)]
pub struct HttpTransportConfigBuilder {
    config: HttpTransportConfig,
}

impl HttpTransportConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set the statuses that are retried
    pub fn retry_statuses(mut self, statuses: impl Into<Vec<u16>>) -> Self {
        self.config.retry_statuses = statuses.into();
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set how many requests may be in flight at once
    pub fn max_concurrent_requests(mut self, limit: usize) -> Self {
        self.config.max_concurrent_requests = limit;
        self
    }

    /// Build the config
    pub fn build(self) -> HttpTransportConfig {
        self.config
    }
}

/// Transport backed by reqwest
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
    rate_limiter: Option<RateLimiter>,
    in_flight: Semaphore,
}

impl HttpTransport {
    /// Create a transport with custom configuration
    pub fn new(config: HttpTransportConfig) -> Result<Self> {
        if config.max_concurrent_requests == 0 {
            return Err(Error::config("max_concurrent_requests must be at least 1"));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        let in_flight = Semaphore::new(config.max_concurrent_requests);

        Ok(Self {
            client,
            config,
            rate_limiter,
            in_flight,
        })
    }

    /// Create a transport from the serde HTTP config
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Self::new(HttpTransportConfig::from(config))
    }

    /// Request slots not currently taken
    pub fn available_slots(&self) -> usize {
        self.in_flight.available_permits()
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Perform a GET, retrying transient failures
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let max_retries = self.config.max_retries;
        let timeout = self.config.timeout;

        let mut last_error = None;
        let mut attempt = 0;

        while attempt <= max_retries {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            match self.client.get(url).timeout(timeout).send().await {
                Ok(response) => {
                    let status = response.status();

                    if self.is_retryable_status(status) {
                        if attempt < max_retries {
                            let delay = if status == StatusCode::TOO_MANY_REQUESTS {
                                extract_retry_after(&response)
                                    .unwrap_or_else(|| self.calculate_backoff(attempt))
                            } else {
                                self.calculate_backoff(attempt)
                            };
                            warn!(
                                "Request to {} answered {}, attempt {}/{}, retrying in {:?}",
                                url,
                                status.as_u16(),
                                attempt + 1,
                                max_retries + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            last_error = Some(Error::http_status(status.as_u16(), ""));
                            continue;
                        }
                        let body = response.text().await.unwrap_or_default();
                        return Err(Error::http_status(status.as_u16(), body));
                    }

                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        return Err(Error::http_status(status.as_u16(), body));
                    }

                    debug!("GET {} succeeded with {}", url, status.as_u16());
                    return Ok(response.text().await?);
                }
                Err(e) => {
                    if e.is_timeout() {
                        let timeout_ms = timeout.as_millis() as u64;
                        if attempt < max_retries {
                            let delay = self.calculate_backoff(attempt);
                            warn!(
                                "Request timeout, attempt {}/{}, retrying in {:?}",
                                attempt + 1,
                                max_retries + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            last_error = Some(Error::Timeout { timeout_ms });
                            continue;
                        }
                        return Err(Error::Timeout { timeout_ms });
                    }

                    if e.is_connect() && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "Connection error, attempt {}/{}, retrying in {:?}",
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::Http(e));
                        continue;
                    }

                    return Err(Error::Http(e));
                }
            }
        }

        Err(last_error.unwrap_or(Error::MaxRetriesExceeded { max_retries }))
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff_type {
            BackoffType::Constant => self.config.initial_backoff,
            BackoffType::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff.saturating_mul(factor)
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }

    fn is_retryable_status(&self, status: StatusCode) -> bool {
        self.config.retry_statuses.contains(&status.as_u16())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String> {
        let _slot = self
            .in_flight
            .acquire()
            .await
            .map_err(|_| Error::execution("transport request slots were closed"))?;
        self.get_text(url).await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .field("available_slots", &self.in_flight.available_permits())
            .finish_non_exhaustive()
    }
}

/// Extract retry-after header value
fn extract_retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
        .map(Duration::from_secs)
}
