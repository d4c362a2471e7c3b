// SPDX-License-Identifier: MPL-2.0
//! Ownership of the current display locale.
//!
//! The controller is the only writer of the active locale. It is created once
//! at startup from the host's language preference and then changed only by
//! explicit user selection.

use super::Locale;
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleController {
    current: Locale,
}

impl LocaleController {
    /// Starts from the host's preferred-language string, either a BCP 47 tag
    /// or a POSIX locale value such as `fr_FR.UTF-8`.
    ///
    /// Anything that does not map to a supported locale is clamped to
    /// `fallback`, so the controller never holds a locale without a bundle.
    pub fn initialize(host_signal: Option<&str>, fallback: Locale) -> Self {
        let current = match host_signal {
            Some(signal) => signal.parse().unwrap_or_else(|err| {
                tracing::warn!("{}, using {}", err, fallback);
                fallback
            }),
            None => fallback,
        };
        Self { current }
    }

    /// Resolves the startup locale from CLI, config, then the OS preference.
    pub fn from_environment(cli_lang: Option<&str>, config: &Config, fallback: Locale) -> Self {
        let current = resolve_locale(cli_lang, config.general.language.as_deref(), || {
            sys_locale::get_locale()
        });
        match current {
            Some(locale) => Self { current: locale },
            None => Self::initialize(None, fallback),
        }
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    /// Overwrites the current locale. Returns `true` when the value changed.
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        let changed = self.current != locale;
        self.current = locale;
        changed
    }
}

/// Picks the first candidate that names a supported locale.
fn resolve_locale(
    cli_lang: Option<&str>,
    config_lang: Option<&str>,
    os_locale: impl FnOnce() -> Option<String>,
) -> Option<Locale> {
    // 1. Check CLI args
    if let Some(locale) = parse_candidate("--lang", cli_lang) {
        return Some(locale);
    }

    // 2. Check config file
    if let Some(locale) = parse_candidate("config", config_lang) {
        return Some(locale);
    }

    // 3. Check OS locale
    parse_candidate("system", os_locale().as_deref())
}

fn parse_candidate(source: &str, value: Option<&str>) -> Option<Locale> {
    let value = value?;
    match value.parse() {
        Ok(locale) => Some(locale),
        Err(err) => {
            tracing::warn!(source, "ignoring {}", err);
            None
        }
    }
}
