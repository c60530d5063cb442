// SPDX-License-Identifier: MPL-2.0
//! Current window bounds and the layout values derived from them.

use crate::app::config::{
    ARTWORK_MAT_PADDING, BODY_SIDE_PADDING, BUTTON_SPACER_RATIO, CAPTION_PADDING_RATIO,
    MAX_ARTWORK_WIDTH, MIN_ARTWORK_WIDTH,
};
use iced::Size;

/// Width and height of the window in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMetrics {
    pub width: f32,
    pub height: f32,
}

impl WindowMetrics {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Side padding of the caption card: a tenth of the window width.
    #[must_use]
    pub fn horizontal_padding(&self) -> f32 {
        self.width * CAPTION_PADDING_RATIO
    }

    /// Gap between the Previous and Next buttons: a fifth of the window width.
    #[must_use]
    pub fn button_spacer(&self) -> f32 {
        self.width * BUTTON_SPACER_RATIO
    }

    /// Width the artwork is drawn at: whatever fits inside the body and
    /// mat paddings, kept within the allowed range.
    #[must_use]
    pub fn artwork_width(&self) -> f32 {
        let available = self.width - 2.0 * BODY_SIDE_PADDING - 2.0 * ARTWORK_MAT_PADDING;
        available.clamp(MIN_ARTWORK_WIDTH, MAX_ARTWORK_WIDTH)
    }
}

impl From<Size> for WindowMetrics {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
