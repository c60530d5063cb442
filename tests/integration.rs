// SPDX-License-Identifier: MPL-2.0
use art_space::app::config::{self, Config, GeneralConfig};
use art_space::app::{navigation_for_key, App, Flags, Message};
use art_space::gallery::{catalog, ScreenIndex};
use art_space::i18n::fluent::I18n;
use art_space::ui::gallery;
use art_space::ui::theming::ThemeMode;
use iced::keyboard::{key::Named, Key};
use tempfile::tempdir;

fn english_app() -> App {
    let config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    App::new(Flags::default(), &config, None)
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("button-previous"), "Previous");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("button-previous"), "Précédent");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn buttons_cycle_through_all_artworks() {
    let mut app = english_app();
    assert_eq!(app.gallery().index(), ScreenIndex::FIRST);

    let mut visited = Vec::new();
    for _ in 0..ScreenIndex::COUNT {
        visited.push(app.gallery().index().get());
        let _ = app.update(Message::Gallery(gallery::Message::Next));
    }

    assert_eq!(visited, vec![1, 2, 3]);
    assert_eq!(app.gallery().index(), ScreenIndex::FIRST);
}

#[test]
fn previous_from_start_shows_last_artwork() {
    let mut app = english_app();
    let _ = app.update(Message::Gallery(gallery::Message::Previous));

    assert_eq!(app.gallery().index().get(), 3);
    assert_eq!(app.gallery().artwork(), &catalog::ARTWORKS[2]);
}

#[test]
fn caption_on_second_screen_is_consistent() {
    let mut app = english_app();
    let _ = app.update(Message::Gallery(gallery::Message::Next));

    let artwork = app.gallery().artwork();
    assert_eq!(app.i18n.tr(artwork.title_key), "Harbor at Dusk");
    assert_eq!(app.i18n.tr(artwork.author_key), "Jonas Berg");
    assert_eq!(app.i18n.tr(artwork.year_key), "(1908)");
}

#[test]
fn arrow_keys_drive_the_same_state_machine() {
    let mut app = english_app();
    let left = navigation_for_key(&Key::Named(Named::ArrowLeft)).expect("left navigates");
    let right = navigation_for_key(&Key::Named(Named::ArrowRight)).expect("right navigates");

    let _ = app.update(Message::Gallery(left));
    assert_eq!(app.gallery().index().get(), 3);
    let _ = app.update(Message::Gallery(right));
    assert_eq!(app.gallery().index().get(), 1);
}

#[test]
fn corrupt_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[window\nwidth = ")
        .expect("Failed to write corrupt config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::LOAD_ERROR_KEY));
}
