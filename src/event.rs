//! Canonical event schema
//!
//! The provider-agnostic record handed to the aggregation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical event status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Published,
    Cancelled,
}

impl EventStatus {
    /// Lowercase name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive event fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    pub name: String,
    pub description: String,
    pub url: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Bookkeeping fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Provider-side identifier
    pub uid: String,
    pub status: EventStatus,
    pub created_at: Option<DateTime<Utc>>,
    /// Topic names
    pub taxonomies: Vec<String>,
}

/// A normalized event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalEvent {
    /// Name of the connector that produced the event
    pub provider: String,
    pub data: EventData,
    pub metadata: EventMetadata,
}

impl CanonicalEvent {
    /// Reasons this event would be rejected by downstream consumers
    pub fn validation_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.metadata.uid.is_empty() {
            errors.push("metadata.uid is empty");
        }
        if self.data.name.is_empty() {
            errors.push("data.name is empty");
        }
        if self.data.start_time.is_none() {
            errors.push("data.start_time is missing");
        }
        errors
    }

    /// Whether the event carries every required field
    pub fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }
}
