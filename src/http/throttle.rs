//! Client-side request throttle
//!
//! A token bucket from `governor` in front of every page request, so long
//! paginations stay under the API quota.

use governor::{DefaultDirectRateLimiter, Quota};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Request quota, as written in the `http.rate_limit` config section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimit {
    /// Sustained requests per second
    pub requests_per_second: u32,
    /// Requests allowed back to back before throttling starts
    pub burst_size: u32,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            requests_per_second: 10,
            burst_size: 10,
        }
    }
}

impl RateLimit {
    /// Build the quota; zero values are raised to one
    fn quota(&self) -> Quota {
        let per_second = NonZeroU32::new(self.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(self.burst_size).unwrap_or(NonZeroU32::MIN);
        Quota::per_second(per_second).allow_burst(burst)
    }
}

/// Waits for a free slot before each request
pub struct Throttle {
    bucket: DefaultDirectRateLimiter,
}

impl Throttle {
    pub fn new(limit: RateLimit) -> Self {
        Self {
            bucket: DefaultDirectRateLimiter::direct(limit.quota()),
        }
    }

    /// Resolve once the next request may be sent
    pub async fn acquire(&self) {
        self.bucket.until_ready().await;
    }
}

impl std::fmt::Debug for Throttle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle").finish_non_exhaustive()
    }
}
