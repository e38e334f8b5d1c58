//! Pagination module
//!
//! Cursor pagination over the group events connection.
//!
//! # Overview
//!
//! The paginator requests pages one at a time and stops once the number of
//! edges received reaches the total reported by the first response. The
//! cursor only selects the next page; it never decides termination.
//! `PaginationLimits` adds opt-in guards for servers that never let the
//! accumulated count reach the total.

mod paginator;
mod types;

pub use paginator::EventPaginator;
pub use types::{PageResult, PaginationLimits, PaginationState, StallPolicy};
