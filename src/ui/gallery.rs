// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the artwork, its caption card and the navigation buttons.
//!
//! The component owns the [`ScreenIndex`] and the rendered artwork images.
//! Everything else it needs to draw (translations, window size, theme) is
//! passed in through [`ViewContext`].

use crate::app::config::{ARTWORK_MAT_PADDING, BODY_SIDE_PADDING, BODY_TOP_PADDING};
use crate::gallery::{catalog, Artwork, ArtworkImages, ScreenIndex};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::window_metrics::WindowMetrics;
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    font,
    widget::{button, scrollable, Column, Container, Row, Text},
    Element, Font, Length, Padding,
};

const LIGHT: Font = Font {
    weight: font::Weight::Light,
    ..Font::DEFAULT
};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub metrics: WindowMetrics,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
}

/// Gallery state.
#[derive(Debug, Default)]
pub struct State {
    index: ScreenIndex,
    images: ArtworkImages,
}

impl State {
    /// Mounts the gallery on the first artwork.
    #[must_use]
    pub fn new(images: ArtworkImages) -> Self {
        Self {
            index: ScreenIndex::FIRST,
            images,
        }
    }

    #[must_use]
    pub fn index(&self) -> ScreenIndex {
        self.index
    }

    /// Record of the artwork currently on screen.
    #[must_use]
    pub fn artwork(&self) -> &'static Artwork {
        catalog::artwork(self.index)
    }

    pub fn update(&mut self, message: Message) {
        let from = self.index;
        self.index = match message {
            Message::Previous => from.previous(),
            Message::Next => from.next(),
        };
        tracing::debug!(?message, %from, to = %self.index, "gallery navigation");
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let artwork = self.artwork();

        let body = Column::new()
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(Padding {
                top: BODY_TOP_PADDING,
                right: BODY_SIDE_PADDING,
                bottom: spacing::LG,
                left: BODY_SIDE_PADDING,
            })
            .push(self.view_artwork(&ctx))
            .push(view_caption(&ctx, artwork))
            .push(view_buttons(&ctx))
            .push(view_position(&ctx, self.index));

        Container::new(scrollable(body).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page(ctx.theme_mode))
            .into()
    }

    fn view_artwork<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let width = ctx.metrics.artwork_width();

        let picture: Element<'a, Message> = match self.images.get(self.index) {
            Some(handle) => Image::new(handle.clone()).width(Length::Fixed(width)).into(),
            None => Container::new(
                Text::new(ctx.i18n.tr("artwork-unavailable")).size(typography::CAPTION),
            )
            .width(Length::Fixed(width))
            .height(Length::Fixed(width))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
        };

        let mat = Container::new(picture)
            .padding(ARTWORK_MAT_PADDING)
            .style(styles::container::artwork_mat(ctx.theme_mode));

        Container::new(mat)
            .padding(top_gap(spacing::ARTWORK_TOP))
            .into()
    }
}

fn view_caption<'a>(ctx: &ViewContext<'a>, artwork: &'static Artwork) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr(artwork.title_key))
        .size(typography::TITLE_SM)
        .font(LIGHT);

    let byline = Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr(artwork.author_key))
                .size(typography::BODY)
                .font(BOLD),
        )
        .push(
            Text::new(ctx.i18n.tr(artwork.year_key))
                .size(typography::BODY)
                .font(LIGHT),
        );

    let content = Column::new()
        .width(Length::Fill)
        .push(Container::new(title).padding(Padding {
            top: spacing::MD,
            right: 0.0,
            bottom: spacing::MD,
            left: spacing::MD,
        }))
        .push(Container::new(byline).padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: spacing::MD,
            left: spacing::MD,
        }));

    let card = Container::new(content)
        .width(Length::Fill)
        .style(styles::container::caption_card(ctx.theme_mode));

    // The card is inset by a share of the window width on both sides.
    let inset = ctx.metrics.horizontal_padding();
    Container::new(card)
        .width(Length::Fill)
        .padding(Padding {
            top: spacing::CAPTION_TOP,
            right: inset,
            bottom: 0.0,
            left: inset,
        })
        .into()
}

fn view_buttons<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let nav_button = |label: String, message: Message| {
        let content = Container::new(Text::new(label).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        button(content)
            .on_press(message)
            .width(Length::FillPortion(1))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::navigation(ctx.theme_mode))
    };

    let row = Row::new()
        .width(Length::Fill)
        .spacing(ctx.metrics.button_spacer())
        .push(nav_button(ctx.i18n.tr("button-previous"), Message::Previous))
        .push(nav_button(ctx.i18n.tr("button-next"), Message::Next));

    Container::new(row)
        .width(Length::Fill)
        .padding(top_gap(spacing::BUTTONS_TOP))
        .into()
}

fn view_position<'a>(ctx: &ViewContext<'a>, index: ScreenIndex) -> Element<'a, Message> {
    let current = index.to_string();
    let total = ScreenIndex::COUNT.to_string();
    let label = ctx
        .i18n
        .tr_with_args("artwork-position", &[("current", &current), ("total", &total)]);

    Container::new(Text::new(label).size(typography::CAPTION))
        .padding(top_gap(spacing::SM))
        .into()
}

fn top_gap(height: f32) -> Padding {
    Padding {
        top: height,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    }
}
