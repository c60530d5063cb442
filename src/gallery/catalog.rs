// SPDX-License-Identifier: MPL-2.0
//! Static table of the artworks shown by the gallery.
//!
//! Each record bundles the image asset with the Fluent keys of its caption,
//! so a single lookup always yields a consistent image/title/author/year set.

use super::ScreenIndex;

/// One artwork: an embedded image plus the translation keys of its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    /// File name of the SVG under `assets/artworks/`.
    pub asset: &'static str,
    pub title_key: &'static str,
    pub author_key: &'static str,
    pub year_key: &'static str,
}

/// All artworks, in screen order.
pub const ARTWORKS: [Artwork; ScreenIndex::COUNT as usize] = [
    Artwork {
        asset: "lemons.svg",
        title_key: "artwork-lemons-title",
        author_key: "artwork-lemons-author",
        year_key: "artwork-lemons-year",
    },
    Artwork {
        asset: "harbor.svg",
        title_key: "artwork-harbor-title",
        author_key: "artwork-harbor-author",
        year_key: "artwork-harbor-year",
    },
    Artwork {
        asset: "hills.svg",
        title_key: "artwork-hills-title",
        author_key: "artwork-hills-author",
        year_key: "artwork-hills-year",
    },
];

/// Returns the artwork displayed on the given screen.
#[must_use]
pub fn artwork(index: ScreenIndex) -> &'static Artwork {
    select(index.get())
}

/// Selects an artwork from a raw 1-based value.
///
/// `1` and `2` map to the first two records; any other value falls back to
/// the third one.
#[must_use]
pub fn select(raw: u8) -> &'static Artwork {
    match raw {
        1 => &ARTWORKS[0],
        2 => &ARTWORKS[1],
        _ => &ARTWORKS[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_table_position() {
        for index in ScreenIndex::all() {
            assert_eq!(artwork(index), &ARTWORKS[index.position()]);
        }
    }

    #[test]
    fn second_screen_fields_all_belong_to_second_artwork() {
        let index = ScreenIndex::new(2).expect("2 is a valid screen");
        let record = artwork(index);
        assert!(record.title_key.starts_with("artwork-harbor-"));
        assert!(record.author_key.starts_with("artwork-harbor-"));
        assert!(record.year_key.starts_with("artwork-harbor-"));
        assert_eq!(record.asset, "harbor.svg");
    }

    #[test]
    fn records_do_not_share_keys_or_assets() {
        for (i, a) in ARTWORKS.iter().enumerate() {
            for b in ARTWORKS.iter().skip(i + 1) {
                assert_ne!(a.asset, b.asset);
                assert_ne!(a.title_key, b.title_key);
                assert_ne!(a.author_key, b.author_key);
                assert_ne!(a.year_key, b.year_key);
            }
        }
    }

    #[test]
    fn out_of_range_raw_values_fall_back_to_third_artwork() {
        assert_eq!(select(0), &ARTWORKS[2]);
        assert_eq!(select(7), &ARTWORKS[2]);
        assert_eq!(select(u8::MAX), &ARTWORKS[2]);
    }
}
