//! GraphQL request construction
//!
//! Holds the fixed group-events query and turns a group, page size and
//! optional cursor into a ready-to-send page request.
//!
//! # Overview
//!
//! - `GROUP_EVENTS_QUERY` - the query document sent on every page
//! - `RequestBuilder` - builds `PageRequest` values (body + headers)

mod builder;
mod template;

pub use builder::{EventVariables, GraphqlRequest, PageRequest, RequestBuilder};
pub use template::{GQL_PATH, GROUP_EVENTS_QUERY, PAGE_LIMIT};

#[cfg(test)]
mod tests;
