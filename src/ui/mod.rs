// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! `view` borrows what it needs through a `ViewContext` and emits
//! application [`Message`](crate::app::Message)s.
//!
//! - [`greeting`] - Localized title and intro text
//! - [`language_switcher`] - One button per available display language

pub mod greeting;
pub mod language_switcher;
