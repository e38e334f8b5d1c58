//! Transport seam between the paginator and the network

use super::client::HttpClient;
use crate::error::Result;
use crate::request::PageRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Sends one GraphQL page request and returns the decoded JSON body
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// POST `request` to `path` (relative to the transport's base URL)
    async fn post_json(&self, path: &str, request: &PageRequest) -> Result<Value>;
}

#[async_trait]
impl GraphqlTransport for HttpClient {
    async fn post_json(&self, path: &str, request: &PageRequest) -> Result<Value> {
        self.post_page(path, request).await
    }
}

#[async_trait]
impl<T: GraphqlTransport + ?Sized> GraphqlTransport for Arc<T> {
    async fn post_json(&self, path: &str, request: &PageRequest) -> Result<Value> {
        (**self).post_json(path, request).await
    }
}
