//! Event normalization
//!
//! Maps raw GraphQL event nodes onto the canonical event schema.
//!
//! # Overview
//!
//! - `convert_status` - provider status to `EventStatus`, failing open
//! - `format_time` - ISO-8601 strings to UTC timestamps, absent on failure
//! - `normalize_event` - one raw node to one `CanonicalEvent`

mod normalizer;
mod status;
mod time;

pub use normalizer::{normalize_event, normalize_events};
pub use status::convert_status;
pub use time::format_time;
