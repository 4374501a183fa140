// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle event types.
//!
//! Every state change the whisper lifecycle makes is mirrored as a
//! [`BannerEvent`], giving hosts a structured trace of what happened and in
//! which order.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::banner::Action;
use crate::host::{HostId, ScreenId};
use crate::scheduler::TimerKind;

/// Something the whisper lifecycle did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BannerEvent {
    /// A collapsed banner was inserted into the host's bar.
    Attached {
        host: HostId,
        title: String,
    },

    /// The expand transition finished.
    Presented {
        host: HostId,
        action: Action,
    },

    /// The banner was collapsed and removed from the bar.
    Hidden {
        host: HostId,
    },

    /// A new message arrived while a banner was attached.
    ReplaceQueued {
        host: HostId,
        action: Action,
    },

    TimerArmed {
        host: HostId,
        timer: TimerKind,
        delay_ms: u64,
    },

    /// A screen's top inset was shifted by `delta`.
    InsetChanged {
        host: HostId,
        screen: ScreenId,
        delta: f32,
    },

    /// The banner was moved after an orientation change.
    Reflowed {
        host: HostId,
        offset_y: f32,
    },

    StackTransition {
        host: HostId,
        screen: ScreenId,
        finished: bool,
    },

    /// A timer fired after it had been cancelled or superseded.
    StaleWake {
        host: HostId,
        timer: TimerKind,
    },

    /// A request named a host that is not registered.
    UnknownHost {
        host: HostId,
    },
}

impl BannerEvent {
    /// Returns the host the event concerns.
    #[must_use]
    pub fn host(&self) -> HostId {
        match self {
            BannerEvent::Attached { host, .. }
            | BannerEvent::Presented { host, .. }
            | BannerEvent::Hidden { host }
            | BannerEvent::ReplaceQueued { host, .. }
            | BannerEvent::TimerArmed { host, .. }
            | BannerEvent::InsetChanged { host, .. }
            | BannerEvent::Reflowed { host, .. }
            | BannerEvent::StackTransition { host, .. }
            | BannerEvent::StaleWake { host, .. }
            | BannerEvent::UnknownHost { host } => *host,
        }
    }

    /// Returns true for events that indicate a request was ignored.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            BannerEvent::StaleWake { .. } | BannerEvent::UnknownHost { .. }
        )
    }
}

/// A lifecycle event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: BannerEvent,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: BannerEvent) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: BannerEvent, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}
