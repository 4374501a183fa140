// SPDX-License-Identifier: MPL-2.0
//! In-memory navigation host.

use super::{NavigationHost, Screen, ScreenId};
use crate::banner::BannerView;
use iced_core::Rectangle;

/// A navigation container kept entirely in memory.
///
/// It records every banner attach so callers can check that no two banners
/// ever share the bar.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    bar: Rectangle,
    status_bar_height: f32,
    subviews: Vec<Rectangle>,
    banners: Vec<BannerView>,
    banner_on_top: bool,
    attach_count: usize,
    peak_attached: usize,
    stack: Vec<ScreenId>,
    screens: Vec<Screen>,
}

impl MemoryHost {
    /// Creates a host whose navigation bar occupies `bar`.
    #[must_use]
    pub fn new(bar: Rectangle) -> Self {
        Self {
            bar,
            status_bar_height: 0.0,
            subviews: Vec::new(),
            banners: Vec::new(),
            banner_on_top: false,
            attach_count: 0,
            peak_attached: 0,
            stack: Vec::new(),
            screens: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_status_bar_height(mut self, height: f32) -> Self {
        self.status_bar_height = height;
        self
    }

    /// Adds a non-banner subview to the bar, on top of everything else.
    pub fn add_subview(&mut self, frame: Rectangle) {
        self.subviews.push(frame);
        self.banner_on_top = false;
    }

    /// Changes the bar frame, as a rotation would.
    pub fn set_bar_frame(&mut self, frame: Rectangle) {
        self.bar = frame;
    }

    /// Pushes a screen on top of the navigation stack.
    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen.id());
        self.screens.push(screen);
    }

    /// Pops the top screen off the navigation stack.
    pub fn pop(&mut self) -> Option<Screen> {
        self.stack.pop();
        self.screens.pop()
    }

    #[must_use]
    pub fn screen(&self, id: ScreenId) -> Option<&Screen> {
        self.screens.iter().find(|screen| screen.id() == id)
    }

    /// The banner currently drawn in the bar.
    #[must_use]
    pub fn banner(&self) -> Option<&BannerView> {
        self.banners.last()
    }

    /// Number of banners currently attached.
    #[must_use]
    pub fn attached_banners(&self) -> usize {
        self.banners.len()
    }

    /// Highest number of banners that were ever attached at once.
    #[must_use]
    pub fn peak_attached(&self) -> usize {
        self.peak_attached
    }

    /// Total number of attach calls received.
    #[must_use]
    pub fn attach_count(&self) -> usize {
        self.attach_count
    }

    #[must_use]
    pub fn is_banner_frontmost(&self) -> bool {
        !self.banners.is_empty() && self.banner_on_top
    }
}

impl NavigationHost for MemoryHost {
    fn bar_frame(&self) -> Rectangle {
        self.bar
    }

    fn status_bar_height(&self) -> f32 {
        self.status_bar_height
    }

    fn bar_subviews(&self) -> Vec<Rectangle> {
        self.subviews.clone()
    }

    fn attach_banner(&mut self, banner: &BannerView) {
        self.banners.push(banner.clone());
        self.banner_on_top = true;
        self.attach_count += 1;
        self.peak_attached = self.peak_attached.max(self.banners.len());
    }

    fn update_banner(&mut self, banner: &BannerView) {
        if let Some(current) = self.banners.last_mut() {
            *current = banner.clone();
        }
    }

    fn detach_banner(&mut self) {
        self.banners.pop();
    }

    fn bring_banner_to_front(&mut self) {
        self.banner_on_top = true;
    }

    fn stack(&self) -> &[ScreenId] {
        &self.stack
    }

    fn screen_mut(&mut self, id: ScreenId) -> Option<&mut Screen> {
        self.screens.iter_mut().find(|screen| screen.id() == id)
    }
}
