// SPDX-License-Identifier: MPL-2.0
//! Serializable lifecycle reports.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BannerEvent;

/// An event with a timestamp relative to the start of collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: BannerEvent,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(event_timestamp: Instant, collection_start: Instant, kind: BannerEvent) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;

        Self { timestamp_ms, kind }
    }
}

/// A snapshot of the collected lifecycle trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleReport {
    /// When the report was generated (ISO 8601)
    pub generated_at: String,
    /// When collection started (ISO 8601)
    pub collection_started_at: String,
    /// Version of `iced_whisper` that produced the report
    pub crate_version: String,
    pub event_count: usize,
    pub warning_count: usize,
    pub events: Vec<SerializableEvent>,
}

impl LifecycleReport {
    #[must_use]
    pub fn new(collection_started_at: DateTime<Utc>, events: Vec<SerializableEvent>) -> Self {
        let warning_count = events.iter().filter(|event| event.kind.is_warning()).count();
        Self {
            generated_at: Utc::now().to_rfc3339(),
            collection_started_at: collection_started_at.to_rfc3339(),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            event_count: events.len(),
            warning_count,
            events,
        }
    }
}
