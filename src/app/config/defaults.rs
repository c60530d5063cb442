// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Layout**: Fixed paddings and proportional layout ratios of the gallery

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels (portrait, phone-like).
pub const DEFAULT_WINDOW_WIDTH: u32 = 480;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

/// Minimum window width; keeps the button row readable.
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Upper bound accepted from the config file.
pub const MAX_WINDOW_DIMENSION: u32 = 8192;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Top padding of the gallery body.
pub const BODY_TOP_PADDING: f32 = 24.0;

/// Left and right padding of the gallery body.
pub const BODY_SIDE_PADDING: f32 = 40.0;

/// Padding between the artwork and the edge of its mat.
pub const ARTWORK_MAT_PADDING: f32 = 20.0;

/// Narrowest the artwork may be drawn.
pub const MIN_ARTWORK_WIDTH: f32 = 200.0;

/// Widest the artwork may be drawn.
pub const MAX_ARTWORK_WIDTH: f32 = 300.0;

/// Caption card side padding as a fraction of the window width.
pub const CAPTION_PADDING_RATIO: f32 = 1.0 / 10.0;

/// Gap between the navigation buttons as a fraction of the window width.
pub const BUTTON_SPACER_RATIO: f32 = 1.0 / 5.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(MAX_WINDOW_DIMENSION > DEFAULT_WINDOW_WIDTH);
    assert!(MAX_WINDOW_DIMENSION > DEFAULT_WINDOW_HEIGHT);

    assert!(MIN_ARTWORK_WIDTH > 0.0);
    assert!(MAX_ARTWORK_WIDTH > MIN_ARTWORK_WIDTH);
    assert!(CAPTION_PADDING_RATIO > 0.0 && CAPTION_PADDING_RATIO < 0.5);
    assert!(BUTTON_SPACER_RATIO > 0.0 && BUTTON_SPACER_RATIO < 1.0);
};
