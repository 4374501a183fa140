// SPDX-License-Identifier: MPL-2.0
//! Diagnostics value types.

/// Lifecycle trace capacity bounds, in events.
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 16;
    pub const MAX: usize = 4096;
    pub const DEFAULT: usize = 256;
}

/// Number of lifecycle events a trace keeps before dropping the oldest.
///
/// Always within 16–4096; out-of-range requests are clamped.
///
/// ```
/// use iced_whisper::domain::diagnostics::BufferCapacity;
///
/// assert_eq!(BufferCapacity::new(64).value(), 64);
/// assert_eq!(BufferCapacity::new(1).value(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(events: usize) -> Self {
        Self(events.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}
