// SPDX-License-Identifier: MPL-2.0
//! `iced_whisper` shows short-lived banners ("whispers") below a navigation bar.
//!
//! A [`Whisper`] tracks the navigation hosts of an application. Showing a
//! [`Message`] inserts a banner under the host's bar, pushes scrollable
//! content down so nothing is hidden, and either leaves the banner in place
//! ([`Action::Present`]) or dismisses it after the pop-up delay
//! ([`Action::Show`]). Timers run through a [`Scheduler`](scheduler::Scheduler)
//! so the whole lifecycle can be driven from a UI event loop or from a
//! virtual clock.

#![doc(html_root_url = "https://docs.rs/iced_whisper/0.1.0")]

pub mod banner;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod host;
pub mod scheduler;
pub mod whisper;

#[cfg(test)]
pub(crate) mod test_utils;

pub use banner::{Action, Message};
pub use whisper::{Phase, Whisper, WhisperSettings};
