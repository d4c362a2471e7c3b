// SPDX-License-Identifier: MPL-2.0
use super::{Locale, LocaleController, MessageCatalog};
use crate::config::Config;
use crate::error::Result;
use fluent_bundle::FluentArgs;
use std::path::Path;

/// Catalog plus current locale, as seen by the views.
#[derive(Debug)]
pub struct I18n {
    catalog: MessageCatalog,
    controller: LocaleController,
}

impl I18n {
    /// Loads the catalog and picks the startup locale.
    ///
    /// A translation directory that cannot be loaded is reported and the
    /// embedded catalog is used instead. Fails only when the embedded catalog
    /// itself is unusable.
    pub fn new(cli_lang: Option<&str>, i18n_dir: Option<&Path>, config: &Config) -> Result<Self> {
        let fallback = config.fallback_locale();

        let catalog = match i18n_dir {
            Some(dir) => MessageCatalog::from_dir(dir, fallback).or_else(|err| {
                tracing::warn!(dir = %dir.display(), error = %err, "using embedded translations");
                MessageCatalog::embedded(fallback)
            })?,
            None => MessageCatalog::embedded(fallback)?,
        };

        let controller = LocaleController::from_environment(cli_lang, config, fallback);
        tracing::info!(locale = %controller.current(), "display language selected");

        Ok(Self::from_parts(catalog, controller))
    }

    pub fn from_parts(catalog: MessageCatalog, controller: LocaleController) -> Self {
        Self {
            catalog,
            controller,
        }
    }

    pub fn current_locale(&self) -> Locale {
        self.controller.current()
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.controller.set_locale(locale) {
            tracing::info!(%locale, "display language changed");
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.catalog.resolve(self.controller.current(), key)
    }

    pub fn tr_with_args(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.catalog
            .resolve_with_args(self.controller.current(), key, args)
    }
}
