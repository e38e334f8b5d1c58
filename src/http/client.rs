//! GraphQL HTTP client
//!
//! Sends page requests as JSON POSTs to the API, throttled and retried
//! according to `HttpSettings`.

use super::retry::RetryPolicy;
use super::throttle::{RateLimit, Throttle};
use crate::error::{Error, Result};
use crate::request::PageRequest;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("meetup-events/", env!("CARGO_PKG_VERSION"));

/// Seconds to wait on a 429 without a usable `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Transport settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    /// Per-request timeout
    pub timeout: Duration,
    pub retry: RetryPolicy,
    /// Client-side throttle; `None` disables it
    pub rate_limit: Option<RateLimit>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
            rate_limit: Some(RateLimit::default()),
        }
    }
}

/// HTTP client for the GraphQL endpoint
pub struct HttpClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
    retry: RetryPolicy,
    throttle: Option<Throttle>,
}

impl HttpClient {
    /// Create a client posting to paths under `base_url`
    pub fn new(base_url: &Url, settings: &HttpSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        // Keep the base path when joining relative paths onto it.
        let mut base_url = base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            timeout: settings.timeout,
            retry: settings.retry,
            throttle: settings.rate_limit.map(Throttle::new),
        })
    }

    /// Resolve `path` against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// POST a page request and decode the JSON response body.
    ///
    /// Rate limiting (429), 5xx responses, timeouts and connection failures
    /// are retried per the retry policy; the last error is returned once it
    /// gives up.
    pub async fn post_page(&self, path: &str, request: &PageRequest) -> Result<Value> {
        let url = self.endpoint(path)?;
        let mut attempt = 0;

        loop {
            if let Some(throttle) = &self.throttle {
                throttle.acquire().await;
            }

            let error = match self.send(&url, request).await {
                Ok(body) => {
                    debug!("POST {url} succeeded after {} attempt(s)", attempt + 1);
                    return Ok(body);
                }
                Err(error) => error,
            };

            let Some(delay) = self.retry.delay_after(&error, attempt) else {
                return Err(error);
            };
            warn!(
                "POST {url} failed ({error}), attempt {}/{}, retrying in {delay:?}",
                attempt + 1,
                self.retry.max_retries.saturating_add(1)
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    /// One attempt, with every failure mapped onto `Error`
    async fn send(&self, url: &Url, request: &PageRequest) -> Result<Value> {
        let mut builder = self.client.post(url.clone()).json(&request.body);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited {
                retry_after_seconds: retry_after(&response),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("throttled", &self.throttle.is_some())
            .finish_non_exhaustive()
    }
}

/// Seconds from a `Retry-After` header given in seconds
fn retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
