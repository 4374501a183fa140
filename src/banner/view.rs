// SPDX-License-Identifier: MPL-2.0
//! Banner view model.
//!
//! The view model owns the banner's frame (in the navigation bar's
//! coordinate space) and the frames of its animatable content layers. Hosts
//! only read it; every mutation goes through the whisper lifecycle.

use super::message::Message;
use iced_core::image::Handle;
use iced_core::Rectangle;
use std::time::Duration;

/// Side length of the complement image.
pub const IMAGE_SIZE: f32 = 14.0;

/// Horizontal gap between the complement image and the title.
pub const IMAGE_TITLE_GAP: f32 = 5.0;

/// Vertical offset of content layers while the banner is collapsed.
pub const HIDDEN_LAYER_OFFSET: f32 = -10.0;

/// Duration of one loop through a multi-image loader.
pub const LOADER_CYCLE: Duration = Duration::from_millis(700);

const TITLE_FONT_SIZE: f32 = 13.0;

/// Average glyph advance relative to the font size.
const GLYPH_WIDTH_FACTOR: f32 = 0.55;

/// Content views that animate independently of the banner frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Title,
    ComplementImage,
}

/// Position and opacity of one content view, relative to the banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentLayer {
    kind: LayerKind,
    frame: Rectangle,
    alpha: f32,
}

impl ContentLayer {
    fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            frame: Rectangle {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
            alpha: 1.0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    fn rest_y(&self, banner_height: f32) -> f32 {
        match self.kind {
            LayerKind::Title => 0.0,
            LayerKind::ComplementImage => (banner_height - IMAGE_SIZE) / 2.0,
        }
    }
}

/// Frames cycled by the complement image when a message carries several
/// images.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnimation {
    frames: Vec<Handle>,
    cycle: Duration,
}

impl ImageAnimation {
    #[must_use]
    pub fn frames(&self) -> &[Handle] {
        &self.frames
    }

    #[must_use]
    pub fn cycle(&self) -> Duration {
        self.cycle
    }

    /// Returns the frame visible `elapsed` after the loader started.
    #[must_use]
    pub fn frame_at(&self, elapsed: Duration) -> &Handle {
        let count = self.frames.len() as u128;
        let per_frame = (self.cycle.as_nanos() / count).max(1);
        let index = (elapsed.as_nanos() / per_frame) % count;
        &self.frames[index as usize]
    }
}

/// The banner inserted into a host's navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerView {
    message: Message,
    frame: Rectangle,
    layers: Vec<ContentLayer>,
}

impl BannerView {
    /// Builds an expanded banner spanning `width`, with its content at rest.
    #[must_use]
    pub fn new(message: Message, width: f32) -> Self {
        let mut layers = vec![ContentLayer::new(LayerKind::Title)];
        if message.images().is_some() {
            layers.push(ContentLayer::new(LayerKind::ComplementImage));
        }

        let mut view = Self {
            frame: Rectangle {
                x: 0.0,
                y: 0.0,
                width: width.max(0.0),
                height: message.required_height(),
            },
            message,
            layers,
        };
        view.relayout();
        view.expand();
        view
    }

    #[must_use]
    pub fn message(&self) -> &Message {
        &self.message
    }

    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    #[must_use]
    pub fn layers(&self) -> &[ContentLayer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&ContentLayer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// Returns whether the banner currently occupies vertical space.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.frame.height > 0.0
    }

    /// Static image shown next to the title, if any.
    #[must_use]
    pub fn complement_image(&self) -> Option<&Handle> {
        self.message.images().and_then(<[Handle]>::first)
    }

    /// Loader animation, present only when the message has several images.
    #[must_use]
    pub fn image_animation(&self) -> Option<ImageAnimation> {
        self.message
            .images()
            .filter(|images| images.len() > 1)
            .map(|images| ImageAnimation {
                frames: images.to_vec(),
                cycle: LOADER_CYCLE,
            })
    }

    /// Grows the banner to its full height and moves content to rest, opaque.
    pub fn expand(&mut self) {
        let height = self.message.required_height();
        self.frame.height = height;
        for layer in &mut self.layers {
            layer.frame.y = layer.rest_y(height);
            layer.alpha = 1.0;
        }
    }

    /// Shrinks the banner to zero height with content lifted and transparent.
    pub fn collapse(&mut self) {
        self.frame.height = 0.0;
        for layer in &mut self.layers {
            layer.frame.y = HIDDEN_LAYER_OFFSET;
            layer.alpha = 0.0;
        }
    }

    pub fn set_origin_y(&mut self, y: f32) {
        self.frame.y = y;
    }

    /// Moves the banner and changes its horizontal span, keeping its height.
    pub fn reposition(&mut self, x: f32, y: f32, width: f32) {
        self.frame.x = x;
        self.frame.y = y;
        self.frame.width = width.max(0.0);
    }

    /// Recomputes horizontal layout of the content layers for the current
    /// width. Vertical position and opacity are left to the transitions.
    pub fn relayout(&mut self) {
        let width = self.frame.width;
        let full_height = self.message.required_height();
        let title_width = self.estimated_title_width().min(width);

        let title_x = if self.layer(LayerKind::ComplementImage).is_some() {
            let total = title_width + IMAGE_SIZE + IMAGE_TITLE_GAP;
            let offset = ((width - total) / 2.0).max(0.0);
            if let Some(image) = self.layer_mut(LayerKind::ComplementImage) {
                image.frame.x = offset;
                image.frame.width = IMAGE_SIZE;
                image.frame.height = IMAGE_SIZE;
            }
            offset + IMAGE_SIZE + IMAGE_TITLE_GAP
        } else {
            ((width - title_width) / 2.0).max(0.0)
        };

        if let Some(title) = self.layer_mut(LayerKind::Title) {
            title.frame.x = title_x;
            title.frame.width = title_width.min((width - title_x).max(0.0));
            title.frame.height = full_height;
        }
    }

    fn layer_mut(&mut self, kind: LayerKind) -> Option<&mut ContentLayer> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    fn estimated_title_width(&self) -> f32 {
        self.message.title().chars().count() as f32 * TITLE_FONT_SIZE * GLYPH_WIDTH_FACTOR
    }
}
