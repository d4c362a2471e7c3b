// SPDX-License-Identifier: MPL-2.0
//! `locale_greeter` shows a localized greeting and lets the user switch the
//! display language at runtime.
//!
//! Translations are Fluent bundles ([`i18n::MessageCatalog`]); the active
//! language is owned by a [`i18n::LocaleController`] inside the Iced
//! [`app::App`].

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
