// SPDX-License-Identifier: MPL-2.0
//! Banner timing domain types.
//!
//! - [`PopUpDelay`]: How long an auto-dismissing banner stays on screen

mod newtypes;

pub use newtypes::{pop_up_delay_bounds, PopUpDelay};
