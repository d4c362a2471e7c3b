// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::i18n::Locale;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user pressed the button for a display language.
    LocaleSelected(Locale),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`, `ja-JP`) supplied via CLI.
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (contains `settings.toml`).
    pub config_dir: Option<String>,
}
