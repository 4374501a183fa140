// SPDX-License-Identifier: MPL-2.0
//! Whisper coordinator: one transient banner per navigation host.
//!
//! [`Whisper`] owns the registered hosts, a per-host banner session and the
//! scheduler that drives timed transitions. All entry points run on the event
//! loop thread; timers come back in through [`Whisper::fire`].
//!
//! # Lifecycle
//!
//! ```text
//! Absent ──show──▶ Presenting ──transition──▶ Displayed ──hide──▶ Absent
//!                       ▲                         │
//!                       └──── Hiding ◀──show──────┘   (replace)
//! ```
//!
//! A banner that receives a new message is always hidden first; the
//! replacement is presented once the settle delay has elapsed, so old and new
//! content never share the bar.
//!
//! # Usage
//!
//! ```
//! use iced_whisper::host::{ContentView, MemoryHost, Screen, ScreenId, ViewKind};
//! use iced_whisper::scheduler::ManualScheduler;
//! use iced_whisper::{Action, Message, Whisper};
//! use iced_core::Rectangle;
//! use std::time::Duration;
//!
//! let mut host = MemoryHost::new(Rectangle { x: 0.0, y: 20.0, width: 375.0, height: 44.0 });
//! host.push(Screen::new(ScreenId::new(1), ContentView::new(ViewKind::Table)));
//!
//! let mut whisper = Whisper::new(ManualScheduler::new());
//! let id = whisper.register(host);
//!
//! whisper.show(Message::new("Saved"), id, Action::Show);
//! whisper.advance(Duration::ZERO);
//! assert!(whisper.is_displayed());
//!
//! whisper.advance(Duration::from_millis(1500));
//! assert!(!whisper.is_displayed());
//! ```

mod inset;
mod lifecycle;
mod reflow;
mod session;
mod transition;

pub use inset::{InsetChange, InsetCompensator};
pub use reflow::{banner_offset, reflow, transition_offset};
pub use session::Phase;

use crate::banner::{Action, BannerView, Message};
use crate::config::Config;
use crate::diagnostics::{BannerEvent, DiagnosticsHandle};
use crate::domain::timing::PopUpDelay;
use crate::host::{HostId, NavigationHost};
use crate::scheduler::{ManualScheduler, Scheduler, TimerKind, Wake};
use lifecycle::Lifecycle;
use session::Session;
use std::collections::HashMap;
use std::time::Duration;

/// Runtime settings of a [`Whisper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhisperSettings {
    /// Push scrollable content down while a banner is visible.
    pub modify_inset: bool,
    /// How long a [`Action::Show`] banner stays displayed.
    pub pop_up_delay: PopUpDelay,
    /// Duration of the expand transition.
    pub movement: Duration,
    /// Wait between hiding a banner and presenting its replacement.
    pub settle: Duration,
}

impl Default for WhisperSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for WhisperSettings {
    fn from(config: &Config) -> Self {
        Self {
            modify_inset: config.modify_inset(),
            pop_up_delay: config.pop_up_delay(),
            movement: config.movement(),
            settle: config.settle(),
        }
    }
}

struct Slot<H> {
    host: H,
    session: Option<Session>,
}

impl<H> Slot<H> {
    /// Drops a session that has nothing left to show or wait for.
    fn release_if_idle(&mut self) {
        if self.session.as_ref().is_some_and(Session::is_idle) {
            self.session = None;
        }
    }
}

/// Shows transient banners below the navigation bars of registered hosts.
pub struct Whisper<H, S = ManualScheduler> {
    hosts: HashMap<HostId, Slot<H>>,
    next_host: u64,
    lifecycle: Lifecycle<S>,
}

impl<H: NavigationHost, S: Scheduler> Whisper<H, S> {
    /// Creates a coordinator with default settings.
    pub fn new(scheduler: S) -> Self {
        Self::with_settings(WhisperSettings::default(), scheduler)
    }

    pub fn with_settings(settings: WhisperSettings, scheduler: S) -> Self {
        Self {
            hosts: HashMap::new(),
            next_host: 0,
            lifecycle: Lifecycle::new(settings, scheduler),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &WhisperSettings {
        &self.lifecycle.settings
    }

    /// Sends lifecycle events to a diagnostics collector.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.lifecycle.set_diagnostics(handle);
    }

    /// Starts tracking `host` and returns its identity.
    pub fn register(&mut self, host: H) -> HostId {
        self.next_host += 1;
        let id = HostId::new(self.next_host);
        self.hosts.insert(id, Slot { host, session: None });
        id
    }

    /// Stops tracking a host, removing its banner and cancelling its timers.
    pub fn unregister(&mut self, id: HostId) -> Option<H> {
        let mut slot = self.hosts.remove(&id)?;
        if let Some(session) = slot.session.as_mut() {
            self.lifecycle.tear_down(id, &mut slot.host, session);
        }
        Some(slot.host)
    }

    #[must_use]
    pub fn host(&self, id: HostId) -> Option<&H> {
        self.hosts.get(&id).map(|slot| &slot.host)
    }

    /// Mutable access to a host, e.g. to push a screen before reporting the
    /// transition through [`will_show`](Self::will_show).
    pub fn host_mut(&mut self, id: HostId) -> Option<&mut H> {
        self.hosts.get_mut(&id).map(|slot| &mut slot.host)
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.lifecycle.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.lifecycle.scheduler
    }

    /// Displays `message` on `host`.
    ///
    /// A banner already attached to the host is hidden first and the new one
    /// presented after the settle delay. Unknown hosts are ignored.
    pub fn show(&mut self, message: Message, host: HostId, action: Action) {
        let Some(slot) = self.hosts.get_mut(&host) else {
            self.lifecycle.log(BannerEvent::UnknownHost { host });
            return;
        };

        let modify_inset = self.lifecycle.settings.modify_inset;
        let height = message.required_height();
        let session = slot
            .session
            .get_or_insert_with(|| Session::new(InsetCompensator::new(modify_inset, height)));
        self.lifecycle
            .show(host, &mut slot.host, session, message, action);
        slot.release_if_idle();
    }

    /// Hides the banner on `host`, now or after `after`.
    ///
    /// A zero delay hides before this call returns. A non-zero delay replaces
    /// any dismiss timer armed earlier. Hosts without a banner are ignored.
    pub fn silence(&mut self, host: HostId, after: Duration) {
        let Some(slot) = self.hosts.get_mut(&host) else {
            return;
        };
        let Some(session) = slot.session.as_mut() else {
            return;
        };
        self.lifecycle.silence(host, &mut slot.host, session, after);
        slot.release_if_idle();
    }

    /// Hides the banner on `host` before returning.
    pub fn silence_now(&mut self, host: HostId) {
        self.silence(host, Duration::ZERO);
    }

    /// Delivers a fired timer. Cancelled or superseded wakes are ignored.
    pub fn fire(&mut self, wake: Wake) {
        let host = wake.host();
        let Some(slot) = self.hosts.get_mut(&host) else {
            self.lifecycle.log(BannerEvent::UnknownHost { host });
            return;
        };
        let Some(session) = slot.session.as_mut() else {
            self.lifecycle.log(BannerEvent::StaleWake {
                host,
                timer: wake.kind(),
            });
            return;
        };
        self.lifecycle.fire(&mut slot.host, session, wake);
        slot.release_if_idle();
    }

    /// Returns true while any host shows a fully presented banner.
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.hosts
            .values()
            .any(|slot| Self::slot_phase(slot) == Phase::Displayed)
    }

    #[must_use]
    pub fn is_displayed_on(&self, host: HostId) -> bool {
        self.phase(host) == Phase::Displayed
    }

    #[must_use]
    pub fn phase(&self, host: HostId) -> Phase {
        self.hosts
            .get(&host)
            .map_or(Phase::Absent, Self::slot_phase)
    }

    /// The banner attached to `host`, if any.
    #[must_use]
    pub fn banner(&self, host: HostId) -> Option<&BannerView> {
        self.session(host).and_then(|session| session.banner.as_ref())
    }

    /// Inset currently added to `host`'s content on behalf of the banner.
    #[must_use]
    pub fn applied_inset(&self, host: HostId) -> f32 {
        self.session(host)
            .map_or(0.0, |session| session.inset.applied_delta())
    }

    #[must_use]
    pub fn is_timer_armed(&self, host: HostId, kind: TimerKind) -> bool {
        self.session(host)
            .is_some_and(|session| session.timers.is_armed(kind))
    }

    fn session(&self, host: HostId) -> Option<&Session> {
        self.hosts.get(&host).and_then(|slot| slot.session.as_ref())
    }

    fn slot_phase(slot: &Slot<H>) -> Phase {
        slot.session
            .as_ref()
            .map_or(Phase::Absent, |session| session.phase)
    }
}

impl<H: NavigationHost> Whisper<H, ManualScheduler> {
    /// Moves the virtual clock forward, firing every timer that falls due,
    /// including timers armed by the ones fired along the way.
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.lifecycle.scheduler.now() + by;
        while let Some(wake) = self.lifecycle.scheduler.pop_due(deadline) {
            self.fire(wake);
        }
        self.lifecycle.scheduler.set_now(deadline);
    }

    /// Fires timers until none are left.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.lifecycle.scheduler.next_due() {
            if let Some(wake) = self.lifecycle.scheduler.pop_due(due) {
                self.fire(wake);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::BANNER_HEIGHT;
    use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
    use crate::host::{MemoryHost, ScreenId};
    use crate::test_utils::{assert_relative_eq, table_host};

    const POP_UP: Duration = Duration::from_millis(1500);

    fn whisper() -> (Whisper<MemoryHost>, HostId) {
        let mut whisper = Whisper::new(ManualScheduler::new());
        let id = whisper.register(table_host(&[1]));
        (whisper, id)
    }

    fn inset_of(whisper: &Whisper<MemoryHost>, id: HostId, screen: u64) -> f32 {
        whisper
            .host(id)
            .and_then(|host| host.screen(ScreenId::new(screen)))
            .and_then(|screen| screen.top_inset())
            .expect("screen has a table")
    }

    #[test]
    fn show_attaches_collapsed_then_presents() {
        let (mut whisper, id) = whisper();

        whisper.show(Message::new("Saved"), id, Action::Show);
        assert_eq!(whisper.phase(id), Phase::Presenting);
        assert!(!whisper.is_displayed());
        assert_eq!(whisper.host(id).map(MemoryHost::attached_banners), Some(1));

        whisper.advance(Duration::ZERO);
        assert_eq!(whisper.phase(id), Phase::Displayed);
        assert!(whisper.is_displayed());
        assert!(whisper.is_timer_armed(id, TimerKind::Dismiss));
    }

    #[test]
    fn show_auto_hides_after_exact_pop_up_delay() {
        let (mut whisper, id) = whisper();
        whisper.show(Message::new("Saved"), id, Action::Show);
        whisper.advance(Duration::ZERO);

        whisper.advance(POP_UP - Duration::from_millis(1));
        assert!(whisper.is_displayed_on(id));

        whisper.advance(Duration::from_millis(1));
        assert!(!whisper.is_displayed_on(id));
        assert_eq!(whisper.phase(id), Phase::Absent);
        assert!(whisper.banner(id).is_none());
    }

    #[test]
    fn present_never_auto_hides() {
        let (mut whisper, id) = whisper();
        whisper.show(Message::new("Offline"), id, Action::Present);

        whisper.advance(Duration::from_secs(600));

        assert!(whisper.is_displayed_on(id));
        assert!(!whisper.is_timer_armed(id, TimerKind::Dismiss));
        assert_eq!(whisper.scheduler().pending_count(), 0);
    }

    #[test]
    fn show_then_silence_now_is_deterministic() {
        let (mut whisper, id) = whisper();

        whisper.show(Message::new("Blink"), id, Action::Show);
        whisper.silence_now(id);

        assert!(!whisper.is_displayed());
        assert_eq!(whisper.phase(id), Phase::Absent);
        assert_eq!(whisper.host(id).map(MemoryHost::attached_banners), Some(0));
        assert_eq!(whisper.scheduler().pending_count(), 0);

        whisper.run_until_idle();
        assert!(!whisper.is_displayed());
    }

    #[test]
    fn replace_hides_before_presenting_new_message() {
        let (mut whisper, id) = whisper();
        whisper.show(Message::new("first"), id, Action::Present);
        whisper.advance(Duration::ZERO);

        whisper.show(Message::new("second"), id, Action::Show);
        assert_eq!(whisper.phase(id), Phase::Hiding);
        assert!(whisper.banner(id).is_none());
        assert!(whisper.is_timer_armed(id, TimerKind::Replace));
        assert_relative_eq!(whisper.applied_inset(id), 0.0);

        whisper.advance(Duration::ZERO);
        let host = whisper.host(id).expect("host registered");
        assert_eq!(host.peak_attached(), 1);
        assert_eq!(host.attach_count(), 2);
        assert_eq!(
            whisper.banner(id).map(|banner| banner.message().title()),
            Some("second")
        );
        assert!(whisper.is_displayed_on(id));
        assert!(whisper.is_timer_armed(id, TimerKind::Dismiss));
    }

    #[test]
    fn latest_show_wins_during_pending_replace() {
        let settings = WhisperSettings {
            settle: Duration::from_millis(100),
            ..WhisperSettings::default()
        };
        let mut whisper = Whisper::with_settings(settings, ManualScheduler::new());
        let id = whisper.register(table_host(&[1]));

        whisper.show(Message::new("one"), id, Action::Present);
        whisper.advance(Duration::ZERO);
        whisper.show(Message::new("two"), id, Action::Present);
        whisper.show(Message::new("three"), id, Action::Present);
        whisper.run_until_idle();

        assert_eq!(
            whisper.banner(id).map(|banner| banner.message().title()),
            Some("three")
        );
        assert_eq!(whisper.host(id).map(MemoryHost::peak_attached), Some(1));
        assert_eq!(whisper.scheduler().pending_of(TimerKind::Replace), 0);
    }

    #[test]
    fn silence_now_cancels_pending_replace() {
        let settings = WhisperSettings {
            settle: Duration::from_millis(100),
            ..WhisperSettings::default()
        };
        let mut whisper = Whisper::with_settings(settings, ManualScheduler::new());
        let id = whisper.register(table_host(&[1]));

        whisper.show(Message::new("one"), id, Action::Present);
        whisper.advance(Duration::ZERO);
        whisper.show(Message::new("two"), id, Action::Present);
        whisper.silence_now(id);
        whisper.run_until_idle();

        assert_eq!(whisper.phase(id), Phase::Absent);
        assert!(whisper.banner(id).is_none());
    }

    #[test]
    fn delayed_silence_keeps_only_latest_timer() {
        let (mut whisper, id) = whisper();
        whisper.show(Message::new("Sync"), id, Action::Present);
        whisper.advance(Duration::ZERO);

        whisper.silence(id, Duration::from_millis(500));
        whisper.silence(id, Duration::from_millis(2000));
        assert_eq!(whisper.scheduler().pending_of(TimerKind::Dismiss), 1);

        whisper.advance(Duration::from_millis(1999));
        assert!(whisper.is_displayed_on(id));

        whisper.advance(Duration::from_millis(1));
        assert!(!whisper.is_displayed_on(id));
    }

    #[test]
    fn silence_while_presenting_beats_pop_up_delay() {
        let (mut whisper, id) = whisper();
        whisper.show(Message::new("Saved"), id, Action::Show);
        whisper.silence(id, Duration::from_millis(100));

        whisper.advance(Duration::ZERO);
        assert!(whisper.is_displayed_on(id));
        assert_eq!(whisper.scheduler().pending_of(TimerKind::Dismiss), 1);

        whisper.advance(Duration::from_millis(100));
        assert_eq!(whisper.phase(id), Phase::Absent);
    }

    #[test]
    fn long_silence_while_presenting_outlives_pop_up_delay() {
        let (mut whisper, id) = whisper();
        whisper.show(Message::new("Saved"), id, Action::Show);
        whisper.silence(id, Duration::from_secs(5));
        whisper.advance(Duration::ZERO);

        whisper.advance(POP_UP);
        assert!(whisper.is_displayed_on(id));

        whisper.advance(Duration::from_millis(3499));
        assert!(whisper.is_displayed_on(id));
        whisper.advance(Duration::from_millis(1));
        assert!(!whisper.is_displayed_on(id));
    }

    #[test]
    fn silence_during_slow_transition() {
        let settings = WhisperSettings {
            movement: Duration::from_millis(300),
            ..WhisperSettings::default()
        };
        let mut whisper = Whisper::with_settings(settings, ManualScheduler::new());
        let first = whisper.register(table_host(&[1]));
        let second = whisper.register(table_host(&[1]));

        whisper.show(Message::new("short"), first, Action::Show);
        whisper.show(Message::new("long"), second, Action::Show);
        whisper.silence(first, Duration::from_millis(100));
        whisper.silence(second, Duration::from_millis(1000));

        whisper.advance(Duration::from_millis(100));
        assert_eq!(whisper.phase(first), Phase::Absent);
        assert_eq!(whisper.phase(second), Phase::Presenting);

        whisper.advance(Duration::from_millis(200));
        assert!(whisper.is_displayed_on(second));
        assert_eq!(whisper.phase(first), Phase::Absent);

        whisper.advance(Duration::from_millis(699));
        assert!(whisper.is_displayed_on(second));
        whisper.advance(Duration::from_millis(1));
        assert!(!whisper.is_displayed());
        assert_eq!(whisper.scheduler().pending_count(), 0);
    }

    #[test]
    fn silence_during_pending_replace_dismisses_replacement() {
        let settings = WhisperSettings {
            settle: Duration::from_millis(100),
            ..WhisperSettings::default()
        };
        let mut whisper = Whisper::with_settings(settings, ManualScheduler::new());
        let id = whisper.register(table_host(&[1]));
        whisper.show(Message::new("one"), id, Action::Present);
        whisper.advance(Duration::ZERO);

        whisper.show(Message::new("two"), id, Action::Present);
        whisper.silence(id, Duration::from_millis(200));

        whisper.advance(Duration::from_millis(100));
        assert_eq!(
            whisper.banner(id).map(|banner| banner.message().title()),
            Some("two")
        );
        assert!(whisper.is_timer_armed(id, TimerKind::Dismiss));

        // The delay counts from the moment the replacement attaches.
        whisper.advance(Duration::from_millis(199));
        assert!(whisper.is_displayed_on(id));
        whisper.advance(Duration::from_millis(1));
        assert_eq!(whisper.phase(id), Phase::Absent);

        whisper.advance(Duration::from_secs(10));
        assert!(!whisper.is_displayed());
    }

    #[test]
    fn newer_show_discards_queued_silence() {
        let settings = WhisperSettings {
            settle: Duration::from_millis(100),
            ..WhisperSettings::default()
        };
        let mut whisper = Whisper::with_settings(settings, ManualScheduler::new());
        let id = whisper.register(table_host(&[1]));
        whisper.show(Message::new("one"), id, Action::Present);
        whisper.advance(Duration::ZERO);

        whisper.show(Message::new("two"), id, Action::Present);
        whisper.silence(id, Duration::from_millis(200));
        whisper.show(Message::new("three"), id, Action::Present);
        whisper.advance(Duration::from_secs(10));

        assert!(whisper.is_displayed_on(id));
        assert_eq!(
            whisper.banner(id).map(|banner| banner.message().title()),
            Some("three")
        );
    }

    #[test]
    fn silence_without_banner_is_noop() {
        let (mut whisper, id) = whisper();

        whisper.silence(id, Duration::from_millis(300));
        whisper.silence_now(id);
        whisper.silence_now(HostId::new(99));

        assert_eq!(whisper.phase(id), Phase::Absent);
        assert_eq!(whisper.scheduler().pending_count(), 0);
    }

    #[test]
    fn inset_follows_banner_lifecycle() {
        let (mut whisper, id) = whisper();
        let base = inset_of(&whisper, id, 1);

        whisper.show(Message::new("Saved"), id, Action::Show);
        assert_relative_eq!(inset_of(&whisper, id, 1), base + BANNER_HEIGHT);
        assert_relative_eq!(whisper.applied_inset(id), BANNER_HEIGHT);

        whisper.advance(Duration::ZERO);
        whisper.advance(POP_UP);
        assert_relative_eq!(inset_of(&whisper, id, 1), base);
        assert_relative_eq!(whisper.applied_inset(id), 0.0);
    }

    #[test]
    fn replace_does_not_accumulate_inset() {
        let (mut whisper, id) = whisper();
        let base = inset_of(&whisper, id, 1);

        for title in ["a", "b", "c"] {
            whisper.show(Message::new(title), id, Action::Present);
            whisper.advance(Duration::ZERO);
        }

        assert_relative_eq!(inset_of(&whisper, id, 1), base + BANNER_HEIGHT);
        whisper.silence_now(id);
        assert_relative_eq!(inset_of(&whisper, id, 1), base);
    }

    #[test]
    fn disabled_inset_leaves_content_alone() {
        let settings = WhisperSettings {
            modify_inset: false,
            ..WhisperSettings::default()
        };
        let mut whisper = Whisper::with_settings(settings, ManualScheduler::new());
        let id = whisper.register(table_host(&[1]));
        let base = inset_of(&whisper, id, 1);

        whisper.show(Message::new("Saved"), id, Action::Present);
        whisper.advance(Duration::ZERO);

        assert_relative_eq!(inset_of(&whisper, id, 1), base);
        assert_relative_eq!(whisper.applied_inset(id), 0.0);
    }

    #[test]
    fn hosts_are_independent() {
        let mut whisper = Whisper::new(ManualScheduler::new());
        let first = whisper.register(table_host(&[1]));
        let second = whisper.register(table_host(&[1]));

        whisper.show(Message::new("one"), first, Action::Present);
        whisper.show(Message::new("two"), second, Action::Show);
        whisper.advance(Duration::ZERO);
        whisper.advance(POP_UP);

        assert!(whisper.is_displayed_on(first));
        assert!(!whisper.is_displayed_on(second));
        assert!(whisper.is_displayed());
    }

    #[test]
    fn stale_wake_is_ignored() {
        let (mut whisper, id) = whisper();
        whisper.show(Message::new("Saved"), id, Action::Present);
        whisper.advance(Duration::ZERO);

        whisper.fire(Wake::Dismiss {
            host: id,
            generation: 9_999,
        });
        whisper.fire(Wake::Dismiss {
            host: HostId::new(42),
            generation: 1,
        });

        assert!(whisper.is_displayed_on(id));
    }

    #[test]
    fn unregister_cancels_timers_and_detaches() {
        let (mut whisper, id) = whisper();
        whisper.show(Message::new("Saved"), id, Action::Show);
        whisper.advance(Duration::ZERO);

        let host = whisper.unregister(id).expect("host was registered");

        assert_eq!(host.attached_banners(), 0);
        assert_eq!(whisper.scheduler().pending_count(), 0);
        assert!(whisper.host(id).is_none());
    }

    #[test]
    fn lifecycle_events_reach_collector() {
        let (mut whisper, id) = whisper();
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        whisper.set_diagnostics(collector.handle());

        whisper.show(Message::new("Saved"), id, Action::Show);
        whisper.advance(Duration::ZERO);
        whisper.silence_now(id);
        collector.process_pending();

        let kinds: Vec<_> = collector.kinds().cloned().collect();
        assert!(matches!(kinds.first(), Some(BannerEvent::Attached { title, .. }) if title == "Saved"));
        assert!(kinds.contains(&BannerEvent::Presented {
            host: id,
            action: Action::Show
        }));
        assert_eq!(kinds.last(), Some(&BannerEvent::Hidden { host: id }));
    }

    #[test]
    fn settings_follow_config() {
        let config = Config {
            modify_inset: Some(false),
            pop_up_delay_ms: Some(3000),
            ..Config::default()
        };
        let settings = WhisperSettings::from(&config);

        assert!(!settings.modify_inset);
        assert_eq!(settings.pop_up_delay.as_duration(), Duration::from_secs(3));
    }
}
