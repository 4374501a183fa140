// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and host fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_relative_eq;

use crate::host::{ContentView, MemoryHost, Screen, ScreenId, ViewKind};
use iced_core::Rectangle;

/// Top inset a fixture screen starts with.
pub const BASE_INSET: f32 = 64.0;

/// Portrait navigation bar below a 20 px status bar.
pub fn bar_frame() -> Rectangle {
    Rectangle {
        x: 0.0,
        y: 20.0,
        width: 375.0,
        height: 44.0,
    }
}

/// A screen whose root is a table with [`BASE_INSET`].
pub fn table_screen(id: u64) -> Screen {
    Screen::new(
        ScreenId::new(id),
        ContentView::new(ViewKind::Table).with_top_inset(BASE_INSET),
    )
}

/// A host whose stack holds one table screen per id, bottom first.
pub fn table_host(screens: &[u64]) -> MemoryHost {
    let mut host = MemoryHost::new(bar_frame()).with_status_bar_height(20.0);
    for id in screens {
        host.push(table_screen(*id));
    }
    host
}
