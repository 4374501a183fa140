// SPDX-License-Identifier: MPL-2.0
//! Timing newtypes.

use std::time::Duration;

// =============================================================================
// Pop-Up Delay Bounds
// =============================================================================

/// Pop-up delay bounds in milliseconds (100 ms to 60 s).
pub mod pop_up_delay_bounds {
    /// Minimum pop-up delay.
    pub const MIN_MS: u64 = 100;
    /// Maximum pop-up delay.
    pub const MAX_MS: u64 = 60_000;
    /// Default pop-up delay.
    pub const DEFAULT_MS: u64 = 1500;
}

// =============================================================================
// PopUpDelay
// =============================================================================

/// Time an auto-dismissing banner stays displayed before it hides itself.
///
/// Values are clamped to the 100 ms – 60 s range.
///
/// # Example
///
/// ```
/// use iced_whisper::domain::timing::PopUpDelay;
/// use std::time::Duration;
///
/// let delay = PopUpDelay::new(2000);
/// assert_eq!(delay.as_duration(), Duration::from_secs(2));
///
/// // Values outside range are clamped
/// assert_eq!(PopUpDelay::new(0).millis(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PopUpDelay(u64);

impl PopUpDelay {
    /// Creates a new pop-up delay from milliseconds, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(pop_up_delay_bounds::MIN_MS, pop_up_delay_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for PopUpDelay {
    fn default() -> Self {
        Self(pop_up_delay_bounds::DEFAULT_MS)
    }
}
