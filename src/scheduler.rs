// SPDX-License-Identifier: MPL-2.0
//! One-shot timers for the whisper lifecycle.
//!
//! The lifecycle arms timers through the [`Scheduler`] trait and the
//! embedding event loop hands fired [`Wake`]s back to
//! [`Whisper::fire`](crate::Whisper::fire). Every wake carries the generation
//! it was armed with, so a wake that outlived its cancellation is ignored.
//!
//! [`ManualScheduler`] keeps a virtual clock and is driven explicitly, which
//! makes every interleaving reproducible.

use crate::banner::{Action, Message};
use crate::host::HostId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Handle returned when a timer is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// The three timers a banner session can have outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Hides the banner.
    Dismiss,
    /// Presents the queued replacement banner.
    Replace,
    /// Ends the expand transition.
    Transition,
}

/// Payload delivered when a timer fires.
#[derive(Debug, Clone, PartialEq)]
pub enum Wake {
    Dismiss {
        host: HostId,
        generation: u64,
    },
    Replace {
        host: HostId,
        generation: u64,
        message: Message,
        action: Action,
    },
    TransitionFinished {
        host: HostId,
        generation: u64,
        action: Action,
    },
}

impl Wake {
    #[must_use]
    pub fn host(&self) -> HostId {
        match self {
            Wake::Dismiss { host, .. }
            | Wake::Replace { host, .. }
            | Wake::TransitionFinished { host, .. } => *host,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Wake::Dismiss { generation, .. }
            | Wake::Replace { generation, .. }
            | Wake::TransitionFinished { generation, .. } => *generation,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TimerKind {
        match self {
            Wake::Dismiss { .. } => TimerKind::Dismiss,
            Wake::Replace { .. } => TimerKind::Replace,
            Wake::TransitionFinished { .. } => TimerKind::Transition,
        }
    }
}

/// Fire-once timer primitive provided by the host environment.
pub trait Scheduler {
    /// Arms a timer that delivers `wake` after `after` has elapsed.
    fn schedule(&mut self, after: Duration, wake: Wake) -> TimerId;

    /// Cancels a timer. Cancelling a fired or unknown timer does nothing.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Clone)]
struct Pending {
    id: TimerId,
    due: Duration,
    wake: Wake,
}

/// A scheduler with a virtual clock, advanced by its owner.
///
/// Timers due at the same instant fire in the order they were armed.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of outstanding timers of `kind`.
    #[must_use]
    pub fn pending_of(&self, kind: TimerKind) -> usize {
        self.pending
            .iter()
            .filter(|pending| pending.wake.kind() == kind)
            .count()
    }

    /// Time at which the next timer fires.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|pending| pending.due).min()
    }

    /// Removes and returns the earliest timer due at or before `deadline`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Wake> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= deadline)
            .min_by_key(|(_, pending)| (pending.due, pending.id))
            .map(|(index, _)| index)?;
        let pending = self.pending.remove(index);
        self.now = self.now.max(pending.due);
        Some(pending.wake)
    }

    /// Moves the clock forward without firing anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, after: Duration, wake: Wake) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + after,
            wake,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|pending| pending.id != id);
    }
}
