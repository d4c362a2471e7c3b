// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. The file is never written by the application; the
//! selected display language lives only for the session.
//!
//! # Configuration Sections
//!
//! - `[general]` - Preferred language and fallback language
//!
//! ```toml
//! [general]
//! language = "ja"
//! fallback_language = "en"
//! ```
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()` (`--config-dir`)
//! 3. Set `LOCALE_GREETER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use crate::i18n::Locale;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// Preferred UI language code (e.g., "fr", "ja-JP"). Takes precedence over
    /// the OS preference but not over `--lang`.
    #[serde(default)]
    pub language: Option<String>,

    /// Locale used when a message is missing from the active locale.
    #[serde(default)]
    pub fallback_language: Option<String>,
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// The configured fallback locale, or the built-in default when unset or
    /// unsupported.
    pub fn fallback_locale(&self) -> Locale {
        match self.general.fallback_language.as_deref() {
            Some(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!("fallback_language: {}, using {}", err, DEFAULT_FALLBACK_LOCALE);
                DEFAULT_FALLBACK_LOCALE
            }),
            None => DEFAULT_FALLBACK_LOCALE,
        }
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from `base_dir`, or from the default config
/// directory when `None`.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), error)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
