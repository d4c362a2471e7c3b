// SPDX-License-Identifier: MPL-2.0
use crate::i18n::Locale;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
}

/// Failures of a strict catalog lookup.
///
/// Both variants are recoverable: [`MessageCatalog::resolve`] turns them into
/// fallback text instead of surfacing them to the view.
///
/// [`MessageCatalog::resolve`]: crate::i18n::MessageCatalog::resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The catalog holds no bundle for this locale.
    UnsupportedLocale(Locale),

    /// The bundle exists but cannot produce a value for the key.
    MissingKey { locale: Locale, key: String },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UnsupportedLocale(locale) => {
                write!(f, "No message bundle for locale '{}'", locale)
            }
            LookupError::MissingKey { locale, key } => {
                write!(f, "Message '{}' missing from locale '{}'", key, locale)
            }
        }
    }
}

impl std::error::Error for LookupError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
