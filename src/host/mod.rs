// SPDX-License-Identifier: MPL-2.0
//! Host navigation containers.
//!
//! The whisper lifecycle never touches platform views directly. It talks to
//! a [`NavigationHost`]: a navigation bar that can carry one banner, plus the
//! ordered stack of [`Screen`]s shown below it.
//!
//! [`MemoryHost`] is a complete in-memory implementation, useful for
//! embedding in headless shells and for tests.

mod memory;
mod screen;

pub use memory::MemoryHost;
pub use screen::{ContentView, Screen, ScreenId, ViewKind};

use crate::banner::BannerView;
use iced_core::Rectangle;
use serde::{Deserialize, Serialize};

/// Identity of a host registered with a [`Whisper`](crate::Whisper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostId(u64);

impl HostId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A navigation container that can display a banner below its bar.
///
/// Frames returned by [`bar_subviews`](Self::bar_subviews) and handed to
/// banner methods are in the bar's own coordinate space.
pub trait NavigationHost {
    /// Frame of the navigation bar in its parent's coordinate space.
    fn bar_frame(&self) -> Rectangle;

    /// Height of the status bar drawn above the navigation bar.
    fn status_bar_height(&self) -> f32 {
        0.0
    }

    /// Frames of the bar's subviews, excluding the banner.
    fn bar_subviews(&self) -> Vec<Rectangle>;

    /// Inserts the banner as a subview of the bar.
    fn attach_banner(&mut self, banner: &BannerView);

    /// Redraws the attached banner after a frame or layer change.
    fn update_banner(&mut self, banner: &BannerView);

    /// Removes the banner from the bar.
    fn detach_banner(&mut self);

    /// Raises the banner above every other bar subview.
    fn bring_banner_to_front(&mut self);

    /// Screens in the navigation stack, bottom first.
    fn stack(&self) -> &[ScreenId];

    /// The screen currently on display.
    fn visible_screen(&self) -> Option<ScreenId> {
        self.stack().last().copied()
    }

    fn screen_mut(&mut self, id: ScreenId) -> Option<&mut Screen>;
}
