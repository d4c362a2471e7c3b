// SPDX-License-Identifier: MPL-2.0
//! The closed set of display locales.

use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A supported display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    En,
    Fr,
    Ja,
    Zh,
}

impl Locale {
    /// Every supported locale, in the order the language switcher shows them.
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Fr, Locale::Ja, Locale::Zh];

    /// Two-letter language code, also the stem of the locale's `.ftl` file.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Ja => "日本語",
            Locale::Zh => "中文",
        }
    }

    /// Language identifier handed to Fluent for plural rules and formatting.
    pub fn language_identifier(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A language tag that does not name one of the supported locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleParseError(pub String);

impl fmt::Display for LocaleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale '{}'", self.0)
    }
}

impl std::error::Error for LocaleParseError {}

impl FromStr for Locale {
    type Err = LocaleParseError;

    /// Parses a BCP 47 style tag (`fr`, `fr-CA`, `zh_Hant_TW`) and keeps only
    /// its primary language subtag. POSIX codeset and modifier suffixes
    /// (`fr_FR.UTF-8`, `ja_JP@euro`) are ignored.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let bare = tag.trim().split(['.', '@']).next().unwrap_or_default();
        let langid = bare
            .parse::<LanguageIdentifier>()
            .map_err(|_| LocaleParseError(tag.to_string()))?;

        match langid.language.as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            "ja" => Ok(Locale::Ja),
            "zh" => Ok(Locale::Zh),
            _ => Err(LocaleParseError(tag.to_string())),
        }
    }
}
