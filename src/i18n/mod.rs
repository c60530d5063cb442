// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Every `.ftl` file under `assets/i18n/` is embedded in the binary and becomes one
//! locale.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Per-key fallback to `en-US` when a translation is missing
//! - Runtime language switching

pub mod fluent;
