// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ThemeMode;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style for the Previous/Next navigation buttons: pill shaped, brand colored.
pub fn navigation(mode: ThemeMode) -> impl Fn(&Theme, button::Status) -> button::Style {
    let colors = mode.colors();
    move |_theme: &Theme, status: button::Status| {
        let (background, elevation) = match status {
            button::Status::Hovered => (colors.brand_primary, shadow::SM),
            button::Status::Pressed => (colors.brand_secondary, shadow::NONE),
            button::Status::Disabled => (palette::GRAY_200, shadow::NONE),
            button::Status::Active => (colors.brand_secondary, shadow::SM),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                color: colors.brand_secondary,
                width: 0.0,
                radius: radius::FULL.into(),
            },
            shadow: elevation,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_lightens_navigation_button() {
        let style = navigation(ThemeMode::Light);
        let active = style(&Theme::Light, button::Status::Active);
        let hovered = style(&Theme::Light, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
        assert_eq!(active.text_color, palette::WHITE);
    }
}
