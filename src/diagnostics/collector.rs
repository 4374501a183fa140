// SPDX-License-Identifier: MPL-2.0
//! Collects lifecycle events logged by whisper coordinators.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    BannerEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, LifecycleReport,
    SerializableEvent,
};

/// Unprocessed events a collector accepts before dropping new ones.
const DEFAULT_CHANNEL_CAPACITY: usize = 128;

/// Sending side of a [`DiagnosticsCollector`].
///
/// Logging never blocks: when the collector falls behind, events are dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    sender: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log(&self, kind: BannerEvent) {
        let _ = self.try_log(kind);
    }

    /// Like [`log`](Self::log), but reports a full or closed channel.
    ///
    /// # Errors
    ///
    /// Returns the rejected event when the collector is backed up or gone.
    pub fn try_log(&self, kind: BannerEvent) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.sender.try_send(DiagnosticEvent::new(kind))
    }
}

/// Receives events from its handles and keeps the most recent ones.
pub struct DiagnosticsCollector {
    trace: CircularBuffer<DiagnosticEvent>,
    receiver: Receiver<DiagnosticEvent>,
    sender: Sender<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_channel_capacity(capacity, DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a collector that holds at most `channel_capacity` events
    /// between two calls to [`process_pending`](Self::process_pending).
    #[must_use]
    pub fn with_channel_capacity(capacity: BufferCapacity, channel_capacity: usize) -> Self {
        let (sender, receiver) = bounded(channel_capacity.max(1));
        Self {
            trace: CircularBuffer::new(capacity),
            receiver,
            sender,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            sender: self.sender.clone(),
        }
    }

    /// Moves every event sent so far into the trace.
    pub fn process_pending(&mut self) {
        self.trace.extend(self.receiver.try_iter());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.trace.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &BannerEvent> {
        self.trace.iter().map(|event| &event.kind)
    }

    pub fn clear(&mut self) {
        self.trace.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.trace.capacity()
    }

    #[must_use]
    pub fn report(&self) -> LifecycleReport {
        let events = self
            .trace
            .iter()
            .map(|event| SerializableEvent::new(event.timestamp, self.started_at, event.kind.clone()))
            .collect();
        LifecycleReport::new(self.started_at_utc, events)
    }

    /// Serializes [`report`](Self::report) as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.report())
    }
}
