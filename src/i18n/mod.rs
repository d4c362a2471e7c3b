// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string lookup.
//!
//! # Features
//!
//! - Startup locale from CLI, config, or system settings, clamped to a supported locale
//! - Embedded `.ftl` translation files, with an optional directory override
//! - Runtime language switching
//! - Fallback to the default locale, then to the raw key, when translations are missing

mod catalog;
mod controller;
pub mod fluent;
mod locale;

pub use catalog::MessageCatalog;
pub use controller::LocaleController;
pub use locale::{Locale, LocaleParseError};
