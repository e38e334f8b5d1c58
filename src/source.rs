//! Event source trait and the Meetup connector
//!
//! `EventSource` is what the aggregation layer calls. `MeetupSource`
//! implements it on top of an injected `GraphqlTransport`.

use crate::config::{MeetupConfig, PROVIDER_NAME};
use crate::error::{Error, Result};
use crate::event::CanonicalEvent;
use crate::http::{GraphqlTransport, HttpClient};
use crate::normalize::normalize_events;
use crate::pagination::EventPaginator;
use crate::request::RequestBuilder;
use crate::types::Credential;
use async_trait::async_trait;
use tracing::instrument;

/// A provider of canonical events
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Provider name stamped on every event this source returns
    fn provider(&self) -> &'static str;

    /// List every event of a group, in provider delivery order
    async fn list_events(&self, group: &str, credential: &Credential)
        -> Result<Vec<CanonicalEvent>>;
}

/// Meetup GraphQL event source
pub struct MeetupSource<T = HttpClient> {
    transport: T,
    config: MeetupConfig,
}

impl MeetupSource<HttpClient> {
    /// Create a source backed by the HTTP client described in `config`
    pub fn new(config: MeetupConfig) -> Result<Self> {
        let transport = HttpClient::new(&config.base_url, &config.http)?;
        Ok(Self { transport, config })
    }
}

impl<T: GraphqlTransport> MeetupSource<T> {
    /// Create a source with a custom transport
    pub fn with_transport(config: MeetupConfig, transport: T) -> Self {
        Self { transport, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &MeetupConfig {
        &self.config
    }

    /// Get the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List events for the group and token stored in the configuration
    pub async fn list_configured_events(&self) -> Result<Vec<CanonicalEvent>> {
        let group = self
            .config
            .group_urlname
            .as_ref()
            .ok_or_else(|| Error::missing_field("group_urlname"))?;
        let token = self
            .config
            .token
            .as_ref()
            .ok_or_else(|| Error::missing_field("token"))?;

        self.list_events(group.as_str(), token).await
    }
}

#[async_trait]
impl<T: GraphqlTransport> EventSource for MeetupSource<T> {
    fn provider(&self) -> &'static str {
        PROVIDER_NAME
    }

    #[instrument(level = "info", skip(self, credential))]
    async fn list_events(
        &self,
        group: &str,
        credential: &Credential,
    ) -> Result<Vec<CanonicalEvent>> {
        let builder = RequestBuilder::new(group, credential.clone(), self.config.page_size)?;
        let nodes = EventPaginator::new(&self.transport, &builder)
            .with_limits(self.config.limits)
            .fetch_all()
            .await?;

        Ok(normalize_events(nodes))
    }
}

impl<T> std::fmt::Debug for MeetupSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeetupSource")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
