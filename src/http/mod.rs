//! HTTP transport module
//!
//! The paginator talks to the API through the `GraphqlTransport` trait.
//! `HttpClient` is the production implementation: JSON POSTs throttled by a
//! token bucket and retried with backoff.

mod client;
mod retry;
mod throttle;
mod transport;

pub use client::{HttpClient, HttpSettings};
pub use retry::RetryPolicy;
pub use throttle::{RateLimit, Throttle};
pub use transport::GraphqlTransport;

#[cfg(test)]
mod tests;
