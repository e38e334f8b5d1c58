//! Retry policy for page requests

use crate::error::Error;
use crate::types::BackoffType;
use std::time::Duration;

/// How a failed page request is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub backoff: BackoffType,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Upper bound for any computed delay
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: BackoffType::Exponential,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Computed delay before retry number `attempt + 1`
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let delay = match self.backoff {
            BackoffType::Constant => self.initial_backoff,
            BackoffType::Linear => self.initial_backoff.saturating_mul(attempt.saturating_add(1)),
            BackoffType::Exponential => self
                .initial_backoff
                .saturating_mul(2u32.saturating_pow(attempt)),
        };
        delay.min(self.max_backoff)
    }

    /// How long to wait before retrying `error`, or `None` to give up.
    ///
    /// A 429 waits for the server's `Retry-After` instead of the backoff.
    pub fn delay_after(&self, error: &Error, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_retries || !error.is_retryable() {
            return None;
        }
        match error {
            Error::RateLimited {
                retry_after_seconds,
            } => Some(Duration::from_secs(*retry_after_seconds)),
            _ => Some(self.backoff_delay(attempt)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn policy(backoff: BackoffType) -> RetryPolicy {
        RetryPolicy {
            max_retries: 3,
            backoff,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_millis(350),
        }
    }

    #[test_case(BackoffType::Constant, [100, 100, 100, 100]; "constant")]
    #[test_case(BackoffType::Linear, [100, 200, 300, 350]; "linear capped")]
    #[test_case(BackoffType::Exponential, [100, 200, 350, 350]; "exponential capped")]
    fn test_backoff_delay(backoff: BackoffType, expected_ms: [u64; 4]) {
        let policy = policy(backoff);
        let delays: Vec<u64> = (0..4)
            .map(|attempt| policy.backoff_delay(attempt).as_millis() as u64)
            .collect();
        assert_eq!(delays, expected_ms);
    }

    #[test]
    fn test_exponential_backoff_does_not_overflow() {
        let policy = policy(BackoffType::Exponential);
        assert_eq!(policy.backoff_delay(200), Duration::from_millis(350));
    }

    #[test]
    fn test_retryable_errors_get_backoff() {
        let policy = policy(BackoffType::Constant);

        assert_eq!(
            policy.delay_after(&Error::http_status(503, ""), 0),
            Some(Duration::from_millis(100))
        );
        assert_eq!(
            policy.delay_after(&Error::Timeout { timeout_ms: 10 }, 2),
            Some(Duration::from_millis(100))
        );
    }

    #[test]
    fn test_rate_limited_waits_for_retry_after() {
        let error = Error::RateLimited {
            retry_after_seconds: 2,
        };
        assert_eq!(
            policy(BackoffType::Constant).delay_after(&error, 0),
            Some(Duration::from_secs(2))
        );
    }

    #[test]
    fn test_gives_up() {
        let policy = policy(BackoffType::Constant);

        assert_eq!(policy.delay_after(&Error::http_status(503, ""), 3), None);
        assert_eq!(policy.delay_after(&Error::http_status(401, ""), 0), None);
        assert_eq!(policy.delay_after(&Error::MalformedPage { page: 2 }, 0), None);
    }
}
