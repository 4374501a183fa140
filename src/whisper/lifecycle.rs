// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle transitions.
//!
//! Every transition works on one host and its session. Timers are armed
//! through the scheduler with a fresh generation; a wake is only honoured
//! while its generation is still the armed one.

use super::inset::InsetChange;
use super::reflow::banner_offset;
use super::session::{Armed, Phase, Session};
use super::WhisperSettings;
use crate::banner::{Action, BannerView, Message};
use crate::diagnostics::{BannerEvent, DiagnosticsHandle};
use crate::host::{HostId, NavigationHost};
use crate::scheduler::{Scheduler, TimerKind, Wake};
use std::time::Duration;

pub(crate) struct Lifecycle<S> {
    pub(crate) scheduler: S,
    pub(crate) settings: WhisperSettings,
    diagnostics: Option<DiagnosticsHandle>,
    next_generation: u64,
}

impl<S: Scheduler> Lifecycle<S> {
    pub(crate) fn new(settings: WhisperSettings, scheduler: S) -> Self {
        Self {
            scheduler,
            settings,
            diagnostics: None,
            next_generation: 0,
        }
    }

    pub(crate) fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub(crate) fn log(&self, event: BannerEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }

    pub(crate) fn log_inset(&self, host: HostId, change: InsetChange) {
        if let InsetChange::Shifted { screen, delta } = change {
            self.log(BannerEvent::InsetChanged {
                host,
                screen,
                delta,
            });
        }
    }

    /// Displays `message`, replacing whatever banner `host` currently shows.
    pub(crate) fn show<H: NavigationHost>(
        &mut self,
        id: HostId,
        host: &mut H,
        session: &mut Session,
        message: Message,
        action: Action,
    ) {
        session.timers.cancel(TimerKind::Replace, &mut self.scheduler);
        session.queued_silence = None;

        if session.banner.is_none() {
            self.attach(id, host, session, message, action);
            return;
        }

        session.timers.cancel(TimerKind::Dismiss, &mut self.scheduler);
        self.hide(id, host, session);
        session.phase = Phase::Hiding;
        self.log(BannerEvent::ReplaceQueued { host: id, action });

        let settle = self.settings.settle;
        self.arm(session, settle, |generation| Wake::Replace {
            host: id,
            generation,
            message,
            action,
        });
    }

    pub(crate) fn silence<H: NavigationHost>(
        &mut self,
        id: HostId,
        host: &mut H,
        session: &mut Session,
        after: Duration,
    ) {
        if session.banner.is_none() {
            if !session.timers.is_armed(TimerKind::Replace) {
                return;
            }
            // The replacement has not attached yet: drop it, or dismiss it
            // `after` once it does.
            if after.is_zero() {
                session.timers.cancel(TimerKind::Replace, &mut self.scheduler);
                session.queued_silence = None;
                session.phase = Phase::Absent;
            } else {
                session.queued_silence = Some(after);
            }
            return;
        }

        session.timers.cancel(TimerKind::Dismiss, &mut self.scheduler);
        if after.is_zero() {
            self.hide(id, host, session);
        } else {
            self.arm(session, after, |generation| Wake::Dismiss {
                host: id,
                generation,
            });
        }
    }

    pub(crate) fn fire<H: NavigationHost>(
        &mut self,
        host: &mut H,
        session: &mut Session,
        wake: Wake,
    ) {
        if !session.timers.claim(wake.kind(), wake.generation()) {
            self.log(BannerEvent::StaleWake {
                host: wake.host(),
                timer: wake.kind(),
            });
            return;
        }

        match wake {
            Wake::Dismiss { host: id, .. } => {
                self.hide(id, host, session);
            }
            Wake::Replace {
                host: id,
                message,
                action,
                ..
            } => {
                if session.banner.is_some() {
                    self.hide(id, host, session);
                }
                self.attach(id, host, session, message, action);
            }
            Wake::TransitionFinished {
                host: id, action, ..
            } => self.finish_transition(id, session, action),
        }
    }

    /// Collapses and removes the banner. Returns false if none was attached.
    pub(crate) fn hide<H: NavigationHost>(
        &mut self,
        id: HostId,
        host: &mut H,
        session: &mut Session,
    ) -> bool {
        let Some(mut banner) = session.banner.take() else {
            return false;
        };

        session.timers.cancel(TimerKind::Dismiss, &mut self.scheduler);
        session.timers.cancel(TimerKind::Transition, &mut self.scheduler);

        let change = session.inset.apply(host, false);
        self.log_inset(id, change);

        banner.collapse();
        host.update_banner(&banner);
        host.detach_banner();
        session.phase = Phase::Absent;
        debug_assert!(session.phase.occupies_bar() || session.inset.applied_screen().is_none());
        self.log(BannerEvent::Hidden { host: id });
        true
    }

    /// Cancels every timer and removes the banner.
    pub(crate) fn tear_down<H: NavigationHost>(
        &mut self,
        id: HostId,
        host: &mut H,
        session: &mut Session,
    ) {
        session.timers.cancel_all(&mut self.scheduler);
        session.queued_silence = None;
        self.hide(id, host, session);
        session.phase = Phase::Absent;
    }

    fn attach<H: NavigationHost>(
        &mut self,
        id: HostId,
        host: &mut H,
        session: &mut Session,
        message: Message,
        action: Action,
    ) {
        let bar = host.bar_frame();
        let mut banner = BannerView::new(message, bar.width);
        banner.collapse();
        banner.set_origin_y(banner_offset(bar, &host.bar_subviews()));

        host.attach_banner(&banner);
        self.log(BannerEvent::Attached {
            host: id,
            title: banner.message().title().to_owned(),
        });
        session.banner = Some(banner);

        self.begin_transition(id, host, session, action);

        if let Some(after) = session.queued_silence.take() {
            self.arm(session, after, |generation| Wake::Dismiss {
                host: id,
                generation,
            });
        }
    }

    fn begin_transition<H: NavigationHost>(
        &mut self,
        id: HostId,
        host: &mut H,
        session: &mut Session,
        action: Action,
    ) {
        session.phase = Phase::Presenting;

        let change = session.inset.apply(host, true);
        self.log_inset(id, change);
        debug_assert!(session.phase.occupies_bar() || session.inset.applied_screen().is_none());

        if let Some(banner) = session.banner.as_mut() {
            banner.expand();
            host.update_banner(banner);
        }

        let movement = self.settings.movement;
        self.arm(session, movement, |generation| Wake::TransitionFinished {
            host: id,
            generation,
            action,
        });
    }

    fn finish_transition(&mut self, id: HostId, session: &mut Session, action: Action) {
        session.phase = Phase::Displayed;
        self.log(BannerEvent::Presented { host: id, action });

        // An explicit silence armed during the transition keeps its own delay.
        if action.auto_dismisses() && !session.timers.is_armed(TimerKind::Dismiss) {
            let delay = self.settings.pop_up_delay.as_duration();
            self.arm(session, delay, |generation| Wake::Dismiss {
                host: id,
                generation,
            });
        }
    }

    /// Arms the timer built by `wake`, replacing any armed timer of its kind.
    fn arm(&mut self, session: &mut Session, after: Duration, wake: impl FnOnce(u64) -> Wake) {
        self.next_generation += 1;
        let generation = self.next_generation;
        let wake = wake(generation);
        let (host, kind) = (wake.host(), wake.kind());

        session.timers.cancel(kind, &mut self.scheduler);
        let id = self.scheduler.schedule(after, wake);
        *session.timers.slot(kind) = Some(Armed { id, generation });

        self.log(BannerEvent::TimerArmed {
            host,
            timer: kind,
            delay_ms: u64::try_from(after.as_millis()).unwrap_or(u64::MAX),
        });
    }
}
