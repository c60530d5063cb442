// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a small artwork gallery built with the Iced GUI framework.
//!
//! It shows one of three bundled artworks with its title, author and year,
//! and pages through them with Previous/Next buttons (or the arrow keys).
//! Translations use Fluent; preferences live in a small TOML file.

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod ui;
