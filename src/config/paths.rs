// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`] (CLI, tests)
//! 2. **Environment variable** `LOCALE_GREETER_CONFIG_DIR`
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "LocaleGreeter";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LOCALE_GREETER_CONFIG_DIR";

/// Returns the application config directory path.
///
/// Without an override or environment variable this is the platform config
/// directory:
/// - Linux: `~/.config/LocaleGreeter/`
/// - macOS: `~/Library/Application Support/LocaleGreeter/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\LocaleGreeter\`
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
