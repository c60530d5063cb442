// SPDX-License-Identifier: MPL-2.0
//! Rasterization of the embedded vector artworks.
//!
//! Artworks ship as SVG files embedded in the binary. They are rendered once
//! at startup with `resvg` into RGBA buffers and wrapped in Iced image
//! handles, so the view never touches the filesystem or the SVG parser.

use super::catalog::{self, Artwork};
use super::ScreenIndex;
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use resvg::usvg;
use rust_embed::RustEmbed;

/// Width in pixels of the rendered artworks. Twice the largest on-screen
/// width so the image stays sharp on HiDPI displays.
pub const RENDER_WIDTH: u32 = 600;

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct ArtworkAssets;

/// Straight (non-premultiplied) RGBA pixels of a rendered artwork.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Converts the buffer into an Iced image handle.
    #[must_use]
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.pixels)
    }
}

/// Renders one artwork to `target_width` pixels wide, keeping its aspect
/// ratio.
pub fn rasterize(artwork: &Artwork, target_width: u32) -> Result<RasterImage> {
    let file = ArtworkAssets::get(artwork.asset)
        .ok_or_else(|| Error::Asset(format!("missing artwork asset {}", artwork.asset)))?;

    let tree = usvg::Tree::from_data(file.data.as_ref(), &usvg::Options::default())
        .map_err(|err| Error::Asset(format!("{}: {err}", artwork.asset)))?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(Error::Asset(format!("{}: empty canvas", artwork.asset)));
    }

    let scale = target_width as f32 / size.width();
    let target_height = (size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(target_width, target_height).ok_or_else(|| {
        Error::Asset(format!(
            "{}: invalid raster size {target_width}x{target_height}",
            artwork.asset
        ))
    })?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha; Iced expects straight RGBA.
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(RasterImage {
        width: target_width,
        height: target_height,
        pixels,
    })
}

/// Image handles for every screen, rendered once at startup.
///
/// A slot is `None` when its artwork could not be rendered; the view shows
/// a placeholder caption instead.
#[derive(Debug, Clone)]
pub struct ArtworkImages {
    handles: Vec<Option<Handle>>,
}

impl ArtworkImages {
    /// Renders every catalog entry, logging (not propagating) failures.
    #[must_use]
    pub fn load() -> Self {
        let handles = catalog::ARTWORKS
            .iter()
            .map(|artwork| match rasterize(artwork, RENDER_WIDTH) {
                Ok(image) => {
                    tracing::debug!(
                        asset = artwork.asset,
                        width = image.width,
                        height = image.height,
                        "rendered artwork"
                    );
                    Some(image.into_handle())
                }
                Err(err) => {
                    tracing::warn!(asset = artwork.asset, "artwork unavailable: {err}");
                    None
                }
            })
            .collect();

        Self { handles }
    }

    /// Placeholder set with no rendered images.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            handles: vec![None; catalog::ARTWORKS.len()],
        }
    }

    /// Returns the image for a screen, if it rendered successfully.
    #[must_use]
    pub fn get(&self, index: ScreenIndex) -> Option<&Handle> {
        self.handles.get(index.position()).and_then(Option::as_ref)
    }
}

impl Default for ArtworkImages {
    fn default() -> Self {
        Self::empty()
    }
}
