// SPDX-License-Identifier: MPL-2.0
//! Banner content and view model.
//!
//! A [`Message`] describes what a whisper says; a [`BannerView`] is the
//! rendered-agnostic model the host draws inside its navigation bar.
//!
//! # Components
//!
//! - [`message`] - `Message` value and the [`Action`] chosen per request
//! - [`view`] - `BannerView` frame and content layer layout

mod message;
mod view;

pub use message::{Action, Message, BANNER_HEIGHT};
pub use view::{
    BannerView, ContentLayer, ImageAnimation, LayerKind, HIDDEN_LAYER_OFFSET, IMAGE_SIZE,
    IMAGE_TITLE_GAP, LOADER_CYCLE,
};
