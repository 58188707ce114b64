// SPDX-License-Identifier: MPL-2.0
//! Top bar with the product lookup input.
//!
//! The lookup input is the desktop stand-in for the storefront's route
//! parameter: submitting an id loads that product into the detail view,
//! exactly like navigating to a new product URL.

use crate::catalog::EntityId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub lookup_value: &'a str,
}

/// Messages emitted by the bar.
#[derive(Debug, Clone)]
pub enum Message {
    LookupChanged(String),
    LookupSubmitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The user asked for a product by id.
    LoadProduct(EntityId),
}

/// Processes a bar message against the lookup input state.
pub fn update(message: Message, lookup_value: &mut String) -> Event {
    match message {
        Message::LookupChanged(value) => {
            *lookup_value = value;
            Event::None
        }
        Message::LookupSubmitted => {
            let trimmed = lookup_value.trim();
            if trimmed.is_empty() {
                Event::None
            } else {
                Event::LoadProduct(EntityId::from(trimmed))
            }
        }
    }
}

/// Renders the bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let placeholder = ctx.i18n.tr("lookup-placeholder");
    let input = text_input(&placeholder, ctx.lookup_value)
        .on_input(Message::LookupChanged)
        .on_submit(Message::LookupSubmitted)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::LOOKUP_INPUT_WIDTH));

    let view_button = button(Text::new(ctx.i18n.tr("lookup-view")).size(typography::BODY))
        .on_press(Message::LookupSubmitted)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_SM);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(input)
        .push(view_button);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_updates_the_lookup_value() {
        let mut value = String::new();
        let event = update(Message::LookupChanged("42".into()), &mut value);

        assert_eq!(event, Event::None);
        assert_eq!(value, "42");
    }

    #[test]
    fn submitting_a_numeric_id_emits_load_event() {
        let mut value = "42".to_string();
        let event = update(Message::LookupSubmitted, &mut value);
        assert_eq!(event, Event::LoadProduct(EntityId::Number(42)));
    }

    #[test]
    fn submitting_an_opaque_id_keeps_it_textual() {
        let mut value = " sku-42 ".to_string();
        let event = update(Message::LookupSubmitted, &mut value);
        assert_eq!(event, Event::LoadProduct(EntityId::Text("sku-42".into())));
    }

    #[test]
    fn submitting_empty_input_does_nothing() {
        let mut value = "   ".to_string();
        let event = update(Message::LookupSubmitted, &mut value);
        assert_eq!(event, Event::None);
    }
}
