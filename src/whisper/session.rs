// SPDX-License-Identifier: MPL-2.0
//! Per-host banner state.

use super::inset::InsetCompensator;
use crate::banner::BannerView;
use crate::scheduler::{Scheduler, TimerId, TimerKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where a host's banner is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No banner attached and nothing pending.
    #[default]
    Absent,
    /// Banner attached, expand transition running.
    Presenting,
    /// Banner fully visible.
    Displayed,
    /// Old banner removed, replacement waiting for the settle delay.
    Hiding,
}

impl Phase {
    /// Returns whether a banner occupies space in this phase.
    #[must_use]
    pub fn occupies_bar(self) -> bool {
        matches!(self, Phase::Presenting | Phase::Displayed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Armed {
    pub(crate) id: TimerId,
    pub(crate) generation: u64,
}

/// The timers a session may have outstanding, at most one per kind.
#[derive(Debug, Default)]
pub(crate) struct Timers {
    dismiss: Option<Armed>,
    replace: Option<Armed>,
    transition: Option<Armed>,
}

impl Timers {
    pub(crate) fn slot(&mut self, kind: TimerKind) -> &mut Option<Armed> {
        match kind {
            TimerKind::Dismiss => &mut self.dismiss,
            TimerKind::Replace => &mut self.replace,
            TimerKind::Transition => &mut self.transition,
        }
    }

    pub(crate) fn is_armed(&self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::Dismiss => self.dismiss.is_some(),
            TimerKind::Replace => self.replace.is_some(),
            TimerKind::Transition => self.transition.is_some(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.dismiss.is_none() && self.replace.is_none() && self.transition.is_none()
    }

    /// Disarms the timer of `kind` if it was armed with `generation`.
    ///
    /// Returns false for wakes that were cancelled or superseded.
    pub(crate) fn claim(&mut self, kind: TimerKind, generation: u64) -> bool {
        let slot = self.slot(kind);
        if slot.is_some_and(|armed| armed.generation == generation) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn cancel(&mut self, kind: TimerKind, scheduler: &mut impl Scheduler) {
        if let Some(armed) = self.slot(kind).take() {
            scheduler.cancel(armed.id);
        }
    }

    pub(crate) fn cancel_all(&mut self, scheduler: &mut impl Scheduler) {
        for kind in [TimerKind::Dismiss, TimerKind::Replace, TimerKind::Transition] {
            self.cancel(kind, scheduler);
        }
    }
}

/// Banner state for one host container.
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) phase: Phase,
    pub(crate) banner: Option<BannerView>,
    pub(crate) inset: InsetCompensator,
    pub(crate) timers: Timers,
    /// Delayed silence requested while a replacement was waiting to attach.
    pub(crate) queued_silence: Option<Duration>,
}

impl Session {
    pub(crate) fn new(inset: InsetCompensator) -> Self {
        Self {
            phase: Phase::Absent,
            banner: None,
            inset,
            timers: Timers::default(),
            queued_silence: None,
        }
    }

    /// A session with no banner and no pending timer can be dropped.
    pub(crate) fn is_idle(&self) -> bool {
        self.banner.is_none() && self.timers.is_empty()
    }
}
