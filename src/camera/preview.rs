// SPDX-License-Identifier: MPL-2.0
//! Live preview surface.
//!
//! Holds the most recent preview frame as an Iced image handle. Frames are
//! requested one at a time; a tick that arrives while a frame is still being
//! rendered is skipped instead of queueing another request.

use iced::widget::image;
use image_rs::RgbaImage;

#[derive(Debug, Clone, Default)]
pub struct PreviewSurface {
    frame: Option<image::Handle>,
    pending: bool,
}

impl PreviewSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a frame request as started. Returns `false` if one is pending.
    pub fn begin_request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Shows `frame`, or keeps the previous one when the backend had none.
    pub fn present(&mut self, frame: Option<RgbaImage>) {
        self.pending = false;
        if let Some(frame) = frame {
            self.frame = Some(image::Handle::from_rgba(
                frame.width(),
                frame.height(),
                frame.into_raw(),
            ));
        }
    }

    /// Drops the current frame, e.g. when the session stops.
    pub fn clear(&mut self) {
        self.frame = None;
        self.pending = false;
    }

    #[must_use]
    pub fn frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref()
    }
}
