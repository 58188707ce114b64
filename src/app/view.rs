// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the lookup bar, the product detail view, and the toast overlay
//! into the window content.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::navbar;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::product_detail;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub detail: &'a product_detail::State,
    pub notifications: &'a Manager,
    pub lookup_value: &'a str,
}

/// Renders the window content.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let bar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        lookup_value: ctx.lookup_value,
    })
    .map(Message::Navbar);

    let detail = ctx.detail.view(ctx.i18n).map(Message::Detail);

    let base = Column::new().push(bar).push(
        Container::new(detail)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    // Toasts live above everything in the bottom-right corner.
    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toasts)
        .into()
}
