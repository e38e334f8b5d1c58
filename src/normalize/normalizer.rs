//! Raw node to canonical event

use super::status::convert_status;
use super::time::format_time;
use crate::config::PROVIDER_NAME;
use crate::event::{CanonicalEvent, EventData, EventMetadata};
use crate::response::RawEventNode;

/// Normalize one raw event node
pub fn normalize_event(node: RawEventNode) -> CanonicalEvent {
    let taxonomies = node.topic_names();

    let data = EventData {
        name: node.title.unwrap_or_default(),
        description: node.description.unwrap_or_default(),
        url: node.event_url.unwrap_or_default(),
        start_time: format_time(node.date_time.as_deref()),
        end_time: format_time(node.end_time.as_deref()),
    };

    let metadata = EventMetadata {
        uid: node.id.unwrap_or_default(),
        status: convert_status(node.status.as_deref()),
        created_at: format_time(node.created_at.as_deref()),
        taxonomies,
    };

    CanonicalEvent {
        provider: PROVIDER_NAME.to_string(),
        data,
        metadata,
    }
}

/// Normalize raw nodes, keeping their order
pub fn normalize_events(nodes: Vec<RawEventNode>) -> Vec<CanonicalEvent> {
    nodes.into_iter().map(normalize_event).collect()
}
