// SPDX-License-Identifier: MPL-2.0
//! Content inset compensation.
//!
//! While a banner hangs below the navigation bar, the visible screen's
//! scrollable content is pushed down by the banner's height so nothing hides
//! behind it. The compensator remembers which screen it shifted and the stack
//! depth at that moment, so the shift is undone exactly once and never on a
//! screen the user navigated to in the meantime.

use crate::host::{NavigationHost, ScreenId};

/// What a compensation request did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsetChange {
    /// Inset modification is turned off.
    Disabled,
    /// Nothing was modified.
    Unchanged,
    /// `screen`'s top inset moved by `delta`.
    Shifted { screen: ScreenId, delta: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Applied {
    screen: ScreenId,
    delta: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsetCompensator {
    enabled: bool,
    height: f32,
    baseline_depth: usize,
    applied: Option<Applied>,
}

impl InsetCompensator {
    #[must_use]
    pub fn new(enabled: bool, height: f32) -> Self {
        Self {
            enabled,
            height,
            baseline_depth: 0,
            applied: None,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Inset currently added on behalf of the banner.
    #[must_use]
    pub fn applied_delta(&self) -> f32 {
        self.applied.map_or(0.0, |applied| applied.delta)
    }

    /// Screen carrying the banner's inset, if any.
    #[must_use]
    pub fn applied_screen(&self) -> Option<ScreenId> {
        self.applied.map(|applied| applied.screen)
    }

    /// Stack depth recorded by the last `down` request.
    #[must_use]
    pub fn baseline_depth(&self) -> usize {
        self.baseline_depth
    }

    /// Pushes content down (`down == true`) or restores it.
    ///
    /// A `down` request records the current stack depth and is ignored while
    /// an inset is already applied. A restore only happens when the stack
    /// depth still matches the recorded one; otherwise the record is dropped
    /// and the screen is left alone.
    pub fn apply<H: NavigationHost + ?Sized>(&mut self, host: &mut H, down: bool) -> InsetChange {
        if !self.enabled {
            return InsetChange::Disabled;
        }

        let depth = host.stack().len();
        if down {
            self.baseline_depth = depth;
            if self.applied.is_some() {
                return InsetChange::Unchanged;
            }
            let Some(screen) = host.visible_screen() else {
                return InsetChange::Unchanged;
            };
            if shift(host, screen, self.height) {
                self.applied = Some(Applied {
                    screen,
                    delta: self.height,
                });
                return InsetChange::Shifted {
                    screen,
                    delta: self.height,
                };
            }
            InsetChange::Unchanged
        } else {
            match self.applied.take() {
                Some(applied) if depth == self.baseline_depth => restore(host, applied),
                _ => InsetChange::Unchanged,
            }
        }
    }

    /// Restores the shifted screen regardless of stack depth.
    pub fn release<H: NavigationHost + ?Sized>(&mut self, host: &mut H) -> InsetChange {
        if !self.enabled {
            return InsetChange::Disabled;
        }
        match self.applied.take() {
            Some(applied) => restore(host, applied),
            None => InsetChange::Unchanged,
        }
    }

    /// Drops the record of the shifted screen without touching it.
    pub fn forget(&mut self) -> InsetChange {
        self.applied = None;
        InsetChange::Unchanged
    }
}

fn restore<H: NavigationHost + ?Sized>(host: &mut H, applied: Applied) -> InsetChange {
    if shift(host, applied.screen, -applied.delta) {
        InsetChange::Shifted {
            screen: applied.screen,
            delta: -applied.delta,
        }
    } else {
        InsetChange::Unchanged
    }
}

fn shift<H: NavigationHost + ?Sized>(host: &mut H, screen: ScreenId, delta: f32) -> bool {
    host.screen_mut(screen)
        .and_then(|screen| screen.inset_target_mut())
        .map(|view| view.top_inset += delta)
        .is_some()
}
