//! Provider status translation

use crate::event::EventStatus;

/// Translate a provider status, ignoring case.
///
/// Unknown or missing statuses map to `Published` so that new upstream
/// values never hide events.
pub fn convert_status(raw: Option<&str>) -> EventStatus {
    let Some(raw) = raw else {
        return EventStatus::Published;
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "draft" => EventStatus::Draft,
        "published" | "active" | "past" | "autosched" => EventStatus::Published,
        "cancelled" | "cancelled_perm" => EventStatus::Cancelled,
        _ => EventStatus::Published,
    }
}
