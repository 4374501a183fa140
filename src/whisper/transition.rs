// SPDX-License-Identifier: MPL-2.0
//! Keeps the banner in place while screens are pushed and popped.

use super::reflow::transition_offset;
use super::Whisper;
use crate::diagnostics::BannerEvent;
use crate::host::{HostId, NavigationHost, ScreenId};
use crate::scheduler::Scheduler;

impl<H: NavigationHost, S: Scheduler> Whisper<H, S> {
    /// Called when `screen` is about to become visible on `host`.
    ///
    /// Raises the banner above the bar content the transition animates in and
    /// pins it below the bar's final bottom edge.
    pub fn will_show(&mut self, host: HostId, screen: ScreenId) {
        let Some(slot) = self.hosts.get_mut(&host) else {
            return;
        };
        let Some(banner) = slot
            .session
            .as_mut()
            .and_then(|session| session.banner.as_mut())
        else {
            return;
        };

        slot.host.bring_banner_to_front();
        let offset = transition_offset(
            slot.host.bar_frame(),
            slot.host.status_bar_height(),
            &slot.host.bar_subviews(),
        );
        banner.set_origin_y(offset);
        slot.host.update_banner(banner);

        self.lifecycle.log(BannerEvent::StackTransition {
            host,
            screen,
            finished: false,
        });
    }

    /// Called once `screen` is the visible screen of `host`.
    ///
    /// Moves inset compensation onto the new screen. A screen left behind by
    /// a push gets its inset back; when the stack returned to its root the
    /// previously compensated screen is gone and its record is dropped.
    pub fn did_show(&mut self, host: HostId, screen: ScreenId) {
        let Some(slot) = self.hosts.get_mut(&host) else {
            return;
        };
        let Some(session) = slot.session.as_mut() else {
            return;
        };
        if session.banner.is_none() {
            return;
        }

        if session
            .inset
            .applied_screen()
            .is_some_and(|applied| applied != screen)
        {
            let index = slot.host.stack().iter().position(|id| *id == screen);
            let change = match index {
                Some(index) if index > 0 => session.inset.release(&mut slot.host),
                _ => session.inset.forget(),
            };
            self.lifecycle.log_inset(host, change);
        }

        let change = session.inset.apply(&mut slot.host, true);
        self.lifecycle.log_inset(host, change);
        self.lifecycle.log(BannerEvent::StackTransition {
            host,
            screen,
            finished: true,
        });
    }
}
