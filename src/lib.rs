//! # Meetup Events
//!
//! A connector that retrieves every event of a Meetup group through the
//! Meetup GraphQL API and normalizes them into a provider-agnostic
//! canonical event schema.
//!
//! ## Features
//!
//! - **Cursor Pagination**: Follows `endCursor` until the group's reported
//!   event count is reached
//! - **Normalization**: Status mapping, UTC timestamps and topic flattening
//! - **HTTP Transport**: Retry with backoff and client-side rate limiting
//! - **YAML Configuration**: File-based config with builder overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meetup_events::{Credential, EventSource, MeetupConfig, MeetupSource, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = MeetupConfig::builder().build()?;
//!     let source = MeetupSource::new(config)?;
//!
//!     let events = source
//!         .list_events("aix-en-provence", &Credential::new("token"))
//!         .await?;
//!
//!     for event in events {
//!         println!("{} {}", event.metadata.uid, event.data.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        EventSource                              │
//! │        list_events(group, credential) → Vec<CanonicalEvent>     │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────────┴──┬──────────────┬────────────────┐
//! │  Request   │   HTTP Transport   │  Pagination  │   Normalize    │
//! ├────────────┼────────────────────┼──────────────┼────────────────┤
//! │ Query      │ POST /gql          │ endCursor    │ Status         │
//! │ Variables  │ Retry + Backoff    │ Count stop   │ UTC times      │
//! │ Headers    │ Rate Limit         │ Stall guard  │ Topics         │
//! └────────────┴────────────────────┴──────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Connector configuration
pub mod config;

/// HTTP client with retry and rate limiting
pub mod http;

/// GraphQL request construction
pub mod request;

/// GraphQL response shapes
pub mod response;

/// Cursor pagination
pub mod pagination;

/// Raw event to canonical event conversion
pub mod normalize;

/// Canonical event schema
pub mod event;

/// Event source trait and the Meetup connector
pub mod source;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{MeetupConfig, MeetupConfigBuilder, DEFAULT_BASE_URL, PROVIDER_NAME};
pub use error::{Error, Result};
pub use event::{CanonicalEvent, EventData, EventMetadata, EventStatus};
pub use pagination::{PaginationLimits, StallPolicy};
pub use source::{EventSource, MeetupSource};
pub use types::{Credential, GroupUrlname};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
