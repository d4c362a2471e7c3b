// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.

use crate::i18n::Locale;

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Locale consulted when the active locale cannot answer a lookup, and used
/// at startup when no candidate names a supported locale.
pub const DEFAULT_FALLBACK_LOCALE: Locale = Locale::En;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 640.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 360.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;
