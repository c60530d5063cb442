// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ThemeMode;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Top app bar: light gray band behind the centered title.
pub fn app_bar(mode: ThemeMode) -> impl Fn(&Theme) -> container::Style {
    let colors = mode.colors();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Page behind the gallery column.
pub fn page(mode: ThemeMode) -> impl Fn(&Theme) -> container::Style {
    let colors = mode.colors();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Mat framing the artwork, raised with a drop shadow.
pub fn artwork_mat(mode: ThemeMode) -> impl Fn(&Theme) -> container::Style {
    let colors = mode.colors();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_secondary),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: shadow::elevated(colors.shadow, shadow::ARTWORK_ELEVATION),
        ..Default::default()
    }
}

/// Card holding the artwork title, author and year.
pub fn caption_card(mode: ThemeMode) -> impl Fn(&Theme) -> container::Style {
    let colors = mode.colors();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}
