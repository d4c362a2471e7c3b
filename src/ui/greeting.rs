// SPDX-License-Identifier: MPL-2.0
//! The two localized text regions: title and intro.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use iced::{
    alignment::Horizontal,
    widget::{Column, Text},
    Element,
};

pub const TITLE_KEY: &str = "app.title";
pub const INTRO_KEY: &str = "app.intro";

const TITLE_SIZE: f32 = 36.0;
const INTRO_SIZE: f32 = 18.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Resolved (title, intro) text for the current locale.
pub fn regions(i18n: &I18n) -> (String, String) {
    (i18n.tr(TITLE_KEY), i18n.tr(INTRO_KEY))
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let (title, intro) = regions(ctx.i18n);

    Column::new()
        .push(Text::new(title).size(TITLE_SIZE))
        .push(Text::new(intro).size(INTRO_SIZE))
        .spacing(12)
        .align_x(Horizontal::Center)
        .into()
}
