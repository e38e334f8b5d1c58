//! Pagination types
//!
//! Page results, loop state and the safety limits applied by the paginator.

use crate::response::{EventConnection, RawEventNode};
use serde::{Deserialize, Serialize};

/// One decoded page of events
#[derive(Debug, Clone, Default)]
pub struct PageResult {
    /// Total events reported for the group
    pub count: u64,
    /// Event nodes, in delivery order
    pub nodes: Vec<RawEventNode>,
    /// Number of edges on the page (including edges with a null node)
    pub edge_count: usize,
    /// Cursor pointing after the last edge
    pub end_cursor: Option<String>,
}

impl From<EventConnection> for PageResult {
    fn from(connection: EventConnection) -> Self {
        let end_cursor = connection.end_cursor().map(str::to_string);
        let edge_count = connection.edges.len();
        let nodes = connection
            .edges
            .into_iter()
            .filter_map(|edge| edge.node)
            .collect();

        Self {
            count: connection.count,
            nodes,
            edge_count,
            end_cursor,
        }
    }
}

impl PageResult {
    /// Describe why this page cannot advance pagination, if it cannot
    pub fn stall_reason(&self, sent_cursor: Option<&str>) -> Option<String> {
        if self.edge_count == 0 {
            return Some("page returned no events".to_string());
        }
        match (self.end_cursor.as_deref(), sent_cursor) {
            (None, _) => Some("page returned no end cursor".to_string()),
            (Some(next), Some(sent)) if next == sent => {
                Some(format!("end cursor '{next}' did not advance"))
            }
            _ => None,
        }
    }
}

/// What to do when a page cannot advance pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StallPolicy {
    /// Log a warning and keep requesting pages
    #[default]
    Continue,
    /// Stop and return the events accumulated so far
    Stop,
    /// Fail the retrieval
    Fail,
}

/// Safety limits for the pagination loop
///
/// The defaults impose no limits: pagination only ends when the accumulated
/// count reaches the server-reported total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationLimits {
    /// Maximum number of pages to request
    #[serde(default)]
    pub max_pages: Option<u32>,
    /// Behavior on a stalled page
    #[serde(default)]
    pub on_stall: StallPolicy,
}

impl PaginationLimits {
    /// Create limits with no bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of pages
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Set the stall policy
    #[must_use]
    pub fn with_stall_policy(mut self, policy: StallPolicy) -> Self {
        self.on_stall = policy;
        self
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub page: u32,
    /// Cursor for the next request
    pub cursor: Option<String>,
    /// Total reported by the first response
    pub total: Option<u64>,
    /// Edges received so far
    pub total_fetched: usize,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched page
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Capture the total; only the first value is kept
    pub fn capture_total(&mut self, count: u64) -> u64 {
        *self.total.get_or_insert(count)
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: usize) {
        self.total_fetched += count;
    }

    /// Set the cursor for the next request
    pub fn set_cursor(&mut self, cursor: Option<String>) {
        self.cursor = cursor;
    }

    /// Whether the accumulated edges cover the captured total
    pub fn is_exhausted(&self) -> bool {
        self.total
            .is_some_and(|total| self.total_fetched as u64 >= total)
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}
