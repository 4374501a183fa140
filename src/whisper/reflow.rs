// SPDX-License-Identifier: MPL-2.0
//! Banner placement inside the navigation bar.

use super::Whisper;
use crate::banner::BannerView;
use crate::diagnostics::BannerEvent;
use crate::host::NavigationHost;
use crate::scheduler::Scheduler;
use iced_core::Rectangle;

fn max_y(frame: &Rectangle) -> f32 {
    frame.y + frame.height
}

/// Vertical offset for a banner below the bar's visible subviews.
///
/// Subviews with no height are ignored; the result is never above the
/// bar's own bottom edge.
#[must_use]
pub fn banner_offset(bar: Rectangle, siblings: &[Rectangle]) -> f32 {
    siblings
        .iter()
        .filter(|frame| frame.height > 0.0)
        .map(max_y)
        .fold(bar.height.max(0.0), f32::max)
}

/// Vertical offset while a push or pop is in flight.
///
/// The bar's own frame may be mid-animation, so the floor is taken from its
/// final bottom edge minus the status bar.
#[must_use]
pub fn transition_offset(bar: Rectangle, status_bar_height: f32, siblings: &[Rectangle]) -> f32 {
    siblings
        .iter()
        .map(max_y)
        .fold((max_y(&bar) - status_bar_height).max(0.0), f32::max)
}

/// Fits `banner` to the bar's current width and sibling layout.
pub fn reflow<H: NavigationHost + ?Sized>(host: &H, banner: &mut BannerView) {
    let bar = host.bar_frame();
    let offset = banner_offset(bar, &host.bar_subviews());
    banner.reposition(0.0, offset, bar.width);
    banner.relayout();
}

impl<H: NavigationHost, S: Scheduler> Whisper<H, S> {
    /// Repositions every attached banner after the device rotated.
    ///
    /// Lifecycle phases, timers and insets are left untouched.
    pub fn orientation_changed(&mut self) {
        for (id, slot) in &mut self.hosts {
            let Some(banner) = slot
                .session
                .as_mut()
                .and_then(|session| session.banner.as_mut())
            else {
                continue;
            };

            reflow(&slot.host, banner);
            slot.host.update_banner(banner);
            self.lifecycle.log(BannerEvent::Reflowed {
                host: *id,
                offset_y: banner.frame().y,
            });
        }
    }
}
