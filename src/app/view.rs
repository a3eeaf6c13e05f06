// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The converter screen fills the window; notifications are stacked on top of
//! it in the bottom-right corner.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::notifications::Manager;
use crate::ui::{converter, toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub converter: &'a converter::State,
    pub notifications: &'a Manager,
    pub now: Instant,
}

/// Renders the converter screen with the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = Container::new(ctx.converter.view(ctx.i18n).map(Message::Converter))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen);

    if ctx.notifications.has_notifications() {
        stack = stack.push(toast::view_overlay(ctx.notifications, ctx.i18n, ctx.now));
    }

    stack.into()
}
