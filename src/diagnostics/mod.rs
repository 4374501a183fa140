// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for tracing banner lifecycles.
//!
//! Coordinators log every state change as a [`BannerEvent`] through a
//! cloneable [`DiagnosticsHandle`]. A [`DiagnosticsCollector`] drains the
//! events into a memory-bounded circular buffer and exports them as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A [`BannerEvent`] with its timestamp
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{BannerEvent, DiagnosticEvent};
pub use report::{LifecycleReport, SerializableEvent};
