// SPDX-License-Identifier: MPL-2.0
//! Message catalog: one Fluent bundle per supported locale.
//!
//! The catalog is built once at startup and never mutated. Lookups come in two
//! flavours:
//!
//! - [`MessageCatalog::lookup`] is strict and reports why a message could not
//!   be produced.
//! - [`MessageCatalog::resolve`] always yields text: the requested locale
//!   first, then the fallback locale, then the key itself.
//!
//! Keys are accepted in dotted form (`app.title`) and map to the hyphenated
//! Fluent identifier (`app-title`), since Fluent ids cannot contain dots.

use super::Locale;
use crate::error::{Error, LookupError, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FTL_EXTENSION: &str = "ftl";

pub struct MessageCatalog {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    fallback: Locale,
}

impl std::fmt::Debug for MessageCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageCatalog")
            .field("locales", &self.available_locales())
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl MessageCatalog {
    /// Builds the catalog shipped inside the binary (`assets/i18n/*.ftl`).
    pub fn embedded(fallback: Locale) -> Result<Self> {
        let mut sources = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_for_file(filename) else {
                tracing::debug!(file = filename, "skipping embedded file without a supported locale");
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let text = String::from_utf8(content.data.into_owned()).map_err(|err| {
                    Error::Catalog(format!("{} is not valid UTF-8: {}", filename, err))
                })?;
                sources.push((locale, text));
            }
        }

        Self::from_sources(fallback, sources)
    }

    /// Builds the catalog from `<locale>.ftl` files in `dir`.
    pub fn from_dir(dir: &Path, fallback: Locale) -> Result<Self> {
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut sources = Vec::new();
        for path in paths {
            let Some(filename) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let Some(locale) = locale_for_file(filename) else {
                tracing::debug!(path = %path.display(), "skipping file without a supported locale");
                continue;
            };
            sources.push((locale, fs::read_to_string(&path)?));
        }

        Self::from_sources(fallback, sources)
    }

    /// Builds the catalog from in-memory Fluent sources.
    ///
    /// Several sources for the same locale are merged into one bundle; a
    /// message id defined twice for one locale is an error. The fallback
    /// locale must end up with a bundle.
    pub fn from_sources<I, S>(fallback: Locale, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Locale, S)>,
        S: Into<String>,
    {
        let mut bundles: HashMap<Locale, FluentBundle<FluentResource>> = HashMap::new();

        for (locale, source) in sources {
            let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
                Error::Catalog(format!("failed to parse {} messages: {:?}", locale, errors))
            })?;

            let bundle = bundles.entry(locale).or_insert_with(|| {
                let mut bundle = FluentBundle::new(vec![locale.language_identifier()]);
                bundle.set_use_isolating(false);
                bundle
            });
            bundle.add_resource(resource).map_err(|errors| {
                Error::Catalog(format!("conflicting {} messages: {:?}", locale, errors))
            })?;
        }

        if !bundles.contains_key(&fallback) {
            return Err(Error::Catalog(format!(
                "no messages for fallback locale '{}'",
                fallback
            )));
        }

        tracing::debug!(locales = bundles.len(), %fallback, "message catalog loaded");
        Ok(Self { bundles, fallback })
    }

    pub fn fallback_locale(&self) -> Locale {
        self.fallback
    }

    /// Locales that have a bundle, in switcher order.
    pub fn available_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.bundles.contains_key(locale))
            .collect()
    }

    pub fn lookup(&self, locale: Locale, key: &str) -> std::result::Result<String, LookupError> {
        self.lookup_with_args(locale, key, None)
    }

    pub fn lookup_with_args(
        &self,
        locale: Locale,
        key: &str,
        args: Option<&FluentArgs<'_>>,
    ) -> std::result::Result<String, LookupError> {
        let bundle = self
            .bundles
            .get(&locale)
            .ok_or(LookupError::UnsupportedLocale(locale))?;

        let missing = || LookupError::MissingKey {
            locale,
            key: key.to_string(),
        };

        let message = bundle.get_message(&fluent_id(key)).ok_or_else(missing)?;
        let pattern = message.value().ok_or_else(missing)?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::debug!(%locale, key, ?errors, "message failed to format");
            return Err(missing());
        }
        Ok(value.into_owned())
    }

    /// Resolves `key` for `locale`, never failing.
    ///
    /// Order: the requested locale, the fallback locale, the key itself.
    pub fn resolve(&self, locale: Locale, key: &str) -> String {
        self.resolve_inner(locale, key, None)
    }

    pub fn resolve_with_args(&self, locale: Locale, key: &str, args: &FluentArgs<'_>) -> String {
        self.resolve_inner(locale, key, Some(args))
    }

    fn resolve_inner(&self, locale: Locale, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        match self.lookup_with_args(locale, key, args) {
            Ok(value) => return value,
            Err(err) => tracing::debug!(error = %err, "falling back to {}", self.fallback),
        }

        if locale != self.fallback {
            if let Ok(value) = self.lookup_with_args(self.fallback, key, args) {
                return value;
            }
        }

        tracing::debug!(key, "rendering raw message key");
        key.to_string()
    }
}

/// Maps a dotted message key to its Fluent identifier.
fn fluent_id(key: &str) -> Cow<'_, str> {
    if key.contains('.') {
        Cow::Owned(key.replace('.', "-"))
    } else {
        Cow::Borrowed(key)
    }
}

fn locale_for_file(filename: &str) -> Option<Locale> {
    let (stem, extension) = filename.rsplit_once('.')?;
    if extension != FTL_EXTENSION {
        return None;
    }
    stem.parse().ok()
}
