// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded branding SVG at runtime to produce an RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rendered icon in pixels.
pub const ICON_SIZE: u32 = 128;

const SVG_SOURCE: &str = include_str!("../assets/branding/art_space.svg");

/// Rasterize the embedded SVG icon to a square RGBA buffer.
fn render_icon_rgba(target: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(t) => t,
        Err(err) => {
            tracing::warn!("window icon unavailable: {err}");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.data().to_vec())
}

/// Builds the window icon, or `None` if the SVG could not be rendered.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = render_icon_rgba(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_to_expected_buffer_size() {
        let rgba = render_icon_rgba(ICON_SIZE).expect("icon should render");
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
    }

    #[test]
    fn icon_is_not_fully_transparent() {
        let rgba = render_icon_rgba(32).expect("icon should render");
        assert!(rgba.chunks_exact(4).any(|px| px[3] == 255));
    }
}
