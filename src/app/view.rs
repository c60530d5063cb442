// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a single screen: the centered app bar on top, an optional
//! startup warning, then the gallery filling the rest of the window.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::window_metrics::WindowMetrics;
use iced::{
    alignment::Horizontal,
    font,
    widget::{Column, Container, Text},
    Element, Font, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub metrics: WindowMetrics,
    pub theme_mode: ThemeMode,
    /// i18n key of a warning raised while starting up.
    pub startup_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_app_bar(ctx.i18n, ctx.theme_mode));

    if let Some(key) = ctx.startup_warning {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                .width(Length::Fill)
                .padding([spacing::XXS, spacing::MD])
                .align_x(Horizontal::Center)
                .style(styles::container::page(ctx.theme_mode)),
        );
    }

    let gallery_view = ctx
        .gallery
        .view(GalleryViewContext {
            i18n: ctx.i18n,
            metrics: ctx.metrics,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Gallery);

    column.push(gallery_view).into()
}

fn view_app_bar(i18n: &I18n, theme_mode: ThemeMode) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("app-bar-title"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: font::Weight::Light,
            ..Font::DEFAULT
        });

    Container::new(title)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .style(styles::container::app_bar(theme_mode))
        .into()
}
