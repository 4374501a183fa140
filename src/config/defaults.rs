// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Insets**: Content inset compensation
//! - **Timing**: Pop-up, transition and replace settle durations
//! - **Diagnostics**: Lifecycle event buffer bounds

// ==========================================================================
// Inset Defaults
// ==========================================================================

/// Whether scrollable content is pushed down while a banner is visible.
pub const DEFAULT_MODIFY_INSET: bool = true;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time an auto-dismissing banner stays visible (in milliseconds).
pub const DEFAULT_POP_UP_DELAY_MS: u64 = 1500;

/// Minimum pop-up delay (in milliseconds).
pub const MIN_POP_UP_DELAY_MS: u64 = 100;

/// Maximum pop-up delay (in milliseconds).
pub const MAX_POP_UP_DELAY_MS: u64 = 60_000;

/// Default duration of the expand transition (in milliseconds).
///
/// Zero completes the transition on the next scheduler turn.
pub const DEFAULT_MOVEMENT_MS: u64 = 0;

/// Default delay between collapsing a banner and presenting its replacement
/// (in milliseconds).
pub const DEFAULT_SETTLE_MS: u64 = 0;

/// Upper bound applied to the movement and settle durations (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;
