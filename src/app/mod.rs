// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the gallery, localization and
//! the window.
//!
//! The `App` struct owns the gallery component, the translations and the
//! last known window size, and translates messages into state changes. The
//! configuration is read once before the window opens because it decides the
//! initial window size.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::navigation_for_key;

use crate::gallery::ArtworkImages;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use crate::ui::window_metrics::WindowMetrics;
use config::{Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    metrics: WindowMetrics,
    theme_mode: ThemeMode,
    /// i18n key of a warning raised while loading the configuration.
    startup_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen_index", &self.gallery.index())
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Builds the window settings from the `[window]` config section.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    let window = window_settings(&config);

    // iced 0.14 requires a Fn boot closure; the state is consumed once.
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, config_warning) = boot_state.borrow_mut().take().unwrap_or_default();
        (App::new(flags, &config, config_warning), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the CLI flags and the loaded
    /// configuration. The gallery always starts on its first artwork.
    pub fn new(flags: Flags, config: &Config, startup_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let (width, height) = config.window.size();

        tracing::info!(
            locale = %i18n.current_locale(),
            width,
            height,
            "starting gallery"
        );

        Self {
            i18n,
            gallery: gallery::State::new(ArtworkImages::load()),
            metrics: WindowMetrics::new(width as f32, height as f32),
            theme_mode: config.general.theme_mode.resolved(),
            startup_warning,
        }
    }

    /// Current gallery state.
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    /// Last known window metrics.
    pub fn metrics(&self) -> WindowMetrics {
        self.metrics
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            metrics: &mut self.metrics,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            metrics: self.metrics,
            theme_mode: self.theme_mode,
            startup_warning: self.startup_warning.as_deref(),
        })
    }
}
