// SPDX-License-Identifier: MPL-2.0
//! Whisper message values.

use iced_core::image::Handle;
use iced_core::Color;
use serde::{Deserialize, Serialize};

/// Height of a fully expanded banner.
pub const BANNER_HEIGHT: f32 = 24.0;

/// How a banner behaves once it is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Stay visible until explicitly silenced.
    Present,
    /// Hide automatically after the pop-up delay.
    #[default]
    Show,
}

impl Action {
    /// Returns whether banners shown with this action dismiss themselves.
    #[must_use]
    pub fn auto_dismisses(self) -> bool {
        matches!(self, Action::Show)
    }
}

/// Content of a single whisper.
///
/// Messages are immutable once built; the builder methods consume and return
/// the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    title: String,
    text_color: Color,
    background_color: Color,
    images: Option<Vec<Handle>>,
}

impl Message {
    /// Creates a message with white text on a light gray background.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text_color: Color::WHITE,
            background_color: Color::from_rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0),
            images: None,
        }
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Attaches images shown next to the title.
    ///
    /// More than one image turns the complement image into a looping loader.
    /// An empty list is treated as no images.
    #[must_use]
    pub fn with_images(mut self, images: Vec<Handle>) -> Self {
        self.images = (!images.is_empty()).then_some(images);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    #[must_use]
    pub fn images(&self) -> Option<&[Handle]> {
        self.images.as_deref()
    }

    /// Returns the vertical space the banner needs once expanded.
    #[must_use]
    pub fn required_height(&self) -> f32 {
        BANNER_HEIGHT
    }
}
