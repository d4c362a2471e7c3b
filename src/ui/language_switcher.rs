// SPDX-License-Identifier: MPL-2.0
//! Row of language buttons, one per supported locale.
//!
//! Each button is labelled with the language's own name so users can find
//! their language whatever the current one is. The active language is drawn
//! with the primary style. A locale without translations stays selectable;
//! its text then comes from the fallback locale.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::i18n::Locale;
use iced::{
    widget::{button, Button, Row, Text},
    Element,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Locales offered by the switcher, paired with whether each one is active.
pub fn selectable_locales(i18n: &I18n) -> Vec<(Locale, bool)> {
    let current = i18n.current_locale();
    Locale::ALL
        .into_iter()
        .map(|locale| (locale, locale == current))
        .collect()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    selectable_locales(ctx.i18n)
        .into_iter()
        .fold(Row::new().spacing(10), |row, (locale, is_current)| {
            let style = if is_current {
                button::primary
            } else {
                button::secondary
            };
            row.push(
                Button::new(Text::new(locale.native_name()))
                    .on_press(Message::LocaleSelected(locale))
                    .style(style),
            )
        })
        .into()
}
