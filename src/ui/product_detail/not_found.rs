// SPDX-License-Identifier: MPL-2.0
//! Fallback view shown when there is no product to display.
//!
//! Covers both "nothing requested yet" and "the fetch failed": the design
//! deliberately does not distinguish the two for the user.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the not-found state.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let glyph = Text::new("🛍")
        .size(sizing::ICON_XL)
        .color(palette::GRAY_400);

    let title = Text::new(i18n.tr("product-not-found"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let hint = Text::new(i18n.tr("product-not-found-hint"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(glyph)
        .push(title)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
