// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: the screen index state machine, the artwork table and
//! the rasterized artwork images.

pub mod artwork_image;
pub mod catalog;
mod screen_index;

pub use artwork_image::ArtworkImages;
pub use catalog::Artwork;
pub use screen_index::ScreenIndex;
