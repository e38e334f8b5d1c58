//! Connector configuration
//!
//! `MeetupConfig` is the validated, strongly typed configuration of the
//! connector. It is assembled with `MeetupConfigBuilder`, either directly
//! in code or from a YAML file:
//!
//! ```yaml
//! group_urlname: aix-en-provence
//! token: "..."
//! base_url: https://api.meetup.com
//! page_size: 20
//! pagination:
//!   max_pages: 50
//!   on_stall: stop
//! http:
//!   timeout_secs: 30
//!   max_retries: 3
//!   backoff: exponential
//!   rate_limit:
//!     requests_per_second: 10
//!     burst_size: 10
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpSettings, RateLimit, RetryPolicy};
use crate::pagination::{PaginationLimits, StallPolicy};
use crate::request::PAGE_LIMIT;
use crate::types::{BackoffType, Credential, GroupUrlname, OptionStringExt};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Provider name stamped on every canonical event
pub const PROVIDER_NAME: &str = "meetup";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.meetup.com";

// ============================================================================
// Validated Config
// ============================================================================

/// Validated connector configuration
#[derive(Debug, Clone)]
pub struct MeetupConfig {
    /// API base URL; requests go to `<base_url>/gql`
    pub base_url: Url,
    /// Default bearer token
    pub token: Option<Credential>,
    /// Default group
    pub group_urlname: Option<GroupUrlname>,
    /// Events requested per page
    pub page_size: u32,
    /// Pagination safety limits
    pub limits: PaginationLimits,
    /// Transport settings
    pub http: HttpSettings,
}

impl MeetupConfig {
    /// Create a new config builder
    pub fn builder() -> MeetupConfigBuilder {
        MeetupConfigBuilder::default()
    }

    /// Load a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(yaml)?;
        MeetupConfigBuilder::from_file(file).build()
    }

    /// Load a config from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder_from_yaml_file(path)?.build()
    }

    /// Read a YAML file into a builder so callers can layer overrides on top
    pub fn builder_from_yaml_file(path: impl AsRef<Path>) -> Result<MeetupConfigBuilder> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        let file: ConfigFile = serde_yaml::from_str(&content)?;
        Ok(MeetupConfigBuilder::from_file(file))
    }
}

// ============================================================================
// File Format
// ============================================================================

/// Raw YAML config; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub group_urlname: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub pagination: PaginationLimits,
    #[serde(default)]
    pub http: HttpFileConfig,
}

/// Raw `http` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpFileConfig {
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub max_retries: Option<u32>,
    #[serde(default)]
    pub backoff: Option<BackoffType>,
    #[serde(default)]
    pub initial_backoff_ms: Option<u64>,
    #[serde(default)]
    pub max_backoff_ms: Option<u64>,
    #[serde(default)]
    pub rate_limit: Option<RateLimit>,
    #[serde(default)]
    pub disable_rate_limit: bool,
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for `MeetupConfig`; validation happens in `build`
#[derive(Debug, Clone, Default)]
pub struct MeetupConfigBuilder {
    group_urlname: Option<String>,
    token: Option<String>,
    base_url: Option<String>,
    page_size: Option<u32>,
    limits: PaginationLimits,
    http: HttpFileConfig,
    timeout: Option<Duration>,
}

impl MeetupConfigBuilder {
    fn from_file(file: ConfigFile) -> Self {
        Self {
            group_urlname: file.group_urlname,
            token: file.token,
            base_url: file.base_url,
            page_size: file.page_size,
            limits: file.pagination,
            http: file.http,
            timeout: None,
        }
    }

    /// Set the default group
    #[must_use]
    pub fn group_urlname(mut self, group: impl Into<String>) -> Self {
        self.group_urlname = Some(group.into());
        self
    }

    /// Set the default bearer token
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the API base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Cap the number of pages requested
    #[must_use]
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.limits.max_pages = Some(max_pages);
        self
    }

    /// Set the stall policy
    #[must_use]
    pub fn on_stall(mut self, policy: StallPolicy) -> Self {
        self.limits.on_stall = policy;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set max retries
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.http.max_retries = Some(retries);
        self
    }

    /// Disable client-side rate limiting
    #[must_use]
    pub fn no_rate_limit(mut self) -> Self {
        self.http.disable_rate_limit = true;
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<MeetupConfig> {
        let defaults = HttpSettings::default();

        let base_url = match self.base_url.none_if_empty() {
            Some(url) => Url::parse(&url)?,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", base_url.scheme()),
            ));
        }

        let group_urlname = match self.group_urlname {
            Some(group) => Some(GroupUrlname::new(group)?),
            None => None,
        };

        let token = match self.token {
            Some(token) => {
                let token = Credential::new(token);
                if token.is_blank() {
                    return Err(Error::invalid_value("token", "must not be blank"));
                }
                Some(token)
            }
            None => None,
        };

        let page_size = self.page_size.unwrap_or(PAGE_LIMIT);
        if page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be greater than 0"));
        }

        if self.limits.max_pages == Some(0) {
            return Err(Error::invalid_value(
                "pagination.max_pages",
                "must be greater than 0",
            ));
        }

        let timeout = self
            .timeout
            .or(self.http.timeout_secs.map(Duration::from_secs))
            .unwrap_or(defaults.timeout);
        if timeout.is_zero() {
            return Err(Error::invalid_value("http.timeout", "must be greater than 0"));
        }

        let retry = RetryPolicy {
            max_retries: self.http.max_retries.unwrap_or(defaults.retry.max_retries),
            backoff: self.http.backoff.unwrap_or(defaults.retry.backoff),
            initial_backoff: self
                .http
                .initial_backoff_ms
                .map_or(defaults.retry.initial_backoff, Duration::from_millis),
            max_backoff: self
                .http
                .max_backoff_ms
                .map_or(defaults.retry.max_backoff, Duration::from_millis),
        };

        let http = HttpSettings {
            timeout,
            retry,
            rate_limit: if self.http.disable_rate_limit {
                None
            } else {
                self.http.rate_limit.or(defaults.rate_limit)
            },
        };

        Ok(MeetupConfig {
            base_url,
            token,
            group_urlname,
            page_size,
            limits: self.limits,
            http,
        })
    }
}
