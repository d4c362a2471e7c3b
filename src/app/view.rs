// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::greeting::{self, ViewContext as GreetingViewContext};
use crate::ui::language_switcher::{self, ViewContext as SwitcherViewContext};
use iced::{
    alignment::Horizontal,
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the greeting above the language switcher, centered in the window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .push(greeting::view(GreetingViewContext { i18n: ctx.i18n }))
        .push(language_switcher::view(SwitcherViewContext { i18n: ctx.i18n }))
        .spacing(30)
        .padding(20)
        .align_x(Horizontal::Center);

    Container::new(content).center(Length::Fill).into()
}
