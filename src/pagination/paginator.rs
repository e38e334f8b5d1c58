//! Event paginator
//!
//! Drives the page loop: build a request, send it through the transport,
//! decode the page, accumulate its nodes, decide whether to continue.

use super::types::{PageResult, PaginationLimits, PaginationState, StallPolicy};
use crate::error::{Error, Result};
use crate::http::GraphqlTransport;
use crate::request::{RequestBuilder, GQL_PATH};
use crate::response::{GraphqlResponse, RawEventNode};
use tracing::{debug, info, warn};

/// Fetches every event node of a group, page by page
pub struct EventPaginator<'a, T: GraphqlTransport + ?Sized> {
    transport: &'a T,
    builder: &'a RequestBuilder,
    limits: PaginationLimits,
}

impl<'a, T: GraphqlTransport + ?Sized> EventPaginator<'a, T> {
    /// Create a paginator with no safety limits
    pub fn new(transport: &'a T, builder: &'a RequestBuilder) -> Self {
        Self {
            transport,
            builder,
            limits: PaginationLimits::default(),
        }
    }

    /// Set safety limits
    #[must_use]
    pub fn with_limits(mut self, limits: PaginationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Fetch and decode a single page
    ///
    /// Returns `None` when the response does not contain the group's events
    /// connection.
    pub async fn fetch_page(&self, cursor: Option<&str>) -> Result<Option<PageResult>> {
        let request = self.builder.page(cursor)?;
        let body = self.transport.post_json(GQL_PATH, &request).await?;
        let response = GraphqlResponse::from_body(body)?;
        Ok(response.into_connection().map(PageResult::from))
    }

    /// Fetch every event node, in delivery order.
    ///
    /// Stops once the edges received reach the total reported by the first
    /// page. A first page without the group connection yields no events.
    /// Any transport error aborts the whole retrieval.
    pub async fn fetch_all(&self) -> Result<Vec<RawEventNode>> {
        let group = self.builder.group();
        let mut state = PaginationState::new();
        let mut nodes = Vec::new();

        while !state.done {
            if let Some(max_pages) = self.limits.max_pages {
                if state.page >= max_pages {
                    return Err(Error::PageLimitExceeded {
                        max_pages,
                        fetched: state.total_fetched,
                        total: state.total.unwrap_or_default(),
                    });
                }
            }

            let sent_cursor = state.cursor.clone();
            let page = self.fetch_page(sent_cursor.as_deref()).await?;
            state.next_page();

            let Some(page) = page else {
                if state.page == 1 {
                    info!("Group '{group}' returned no events connection");
                    return Ok(Vec::new());
                }
                return Err(Error::MalformedPage { page: state.page });
            };

            let total = state.capture_total(page.count);
            if total == 0 {
                debug!("Group '{group}' reports no events");
                break;
            }

            let stall = page.stall_reason(sent_cursor.as_deref());
            state.add_fetched(page.edge_count);
            nodes.extend(page.nodes);

            debug!(
                "Page {}: fetched {} events ({}/{} total)",
                state.page, page.edge_count, state.total_fetched, total
            );

            if state.is_exhausted() {
                state.mark_done();
                continue;
            }

            if let Some(reason) = stall {
                match self.limits.on_stall {
                    StallPolicy::Continue => {
                        warn!("Pagination for '{group}' may not progress: {reason}");
                    }
                    StallPolicy::Stop => {
                        warn!("Stopping pagination for '{group}': {reason}");
                        state.mark_done();
                        continue;
                    }
                    StallPolicy::Fail => return Err(Error::stalled(state.page, reason)),
                }
            }

            state.set_cursor(page.end_cursor);
        }

        info!(
            "Fetched {} events for '{group}' in {} pages",
            nodes.len(),
            state.page
        );
        Ok(nodes)
    }
}
