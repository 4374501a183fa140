// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`timing`]: Banner timing types ([`PopUpDelay`](timing::PopUpDelay))

pub mod diagnostics;
pub mod timing;
