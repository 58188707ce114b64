// SPDX-License-Identifier: MPL-2.0
//! Rendering for the product detail view.
//!
//! Layout contract: two columns. The left column holds the selected
//! variant's image (or a placeholder), the right column holds the product
//! name, price, variant and size selector rows, and the add-to-cart button.

use super::component::{ImageState, Message, State};
use super::not_found;
use crate::catalog::Product;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image as image_widget, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Renders the detail view for the current state.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    if state.is_loading() {
        return loading_view(state, i18n);
    }

    match state.product() {
        Some(product) => detail_view(state, product, i18n),
        None => not_found::view(i18n),
    }
}

/// Centered spinner shown while the product fetch is pending. No partial
/// data is ever rendered around it.
fn loading_view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let spinner =
        AnimatedSpinner::new(palette::PRIMARY_400, state.spinner_rotation()).into_element();

    let caption = Text::new(i18n.tr("loading-product"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(caption);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn detail_view<'a>(state: &'a State, product: &'a Product, i18n: &'a I18n) -> Element<'a, Message> {
    let layout = Row::new()
        .spacing(spacing::LG)
        .push(
            Container::new(image_pane(state, i18n))
                .width(Length::FillPortion(2))
                .padding(spacing::XS),
        )
        .push(
            Container::new(details_column(state, product, i18n))
                .width(Length::FillPortion(1))
                .padding(spacing::XS),
        );

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

/// Left column: the selected variant's first image, a small spinner while
/// its bytes are in flight, or the "no image" placeholder.
fn image_pane<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match state.image() {
        ImageState::Ready(handle) => image_widget(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PRODUCT_IMAGE_HEIGHT))
            .into(),
        ImageState::Loading => {
            AnimatedSpinner::new(palette::GRAY_400, state.spinner_rotation()).into_element()
        }
        ImageState::Unavailable => Text::new(i18n.tr("no-image-available"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PRODUCT_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_pane)
        .into()
}

/// Right column: name, price, selector rows, add to cart.
fn details_column<'a>(
    state: &'a State,
    product: &'a Product,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let name = Text::new(product.name.as_str()).size(typography::TITLE_LG);
    let price = Text::new(product.price_display())
        .size(typography::TITLE_LG)
        .color(palette::PRICE_500);

    let header = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(name)
        .push(price)
        .width(Length::Fill);

    let mut column = Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(variant_row(state, product, i18n));

    if state.selected_variant_ref().is_some() {
        column = column.push(size_row(state, i18n));
    }

    let add_to_cart = button(
        Text::new(i18n.tr("add-to-cart")).size(typography::BODY),
    )
    .on_press(Message::AddToCartPressed)
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary);

    column = column.push(
        Container::new(add_to_cart)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    );

    column.into()
}

/// COLOR heading plus one button per variant.
fn variant_row<'a>(state: &'a State, product: &'a Product, i18n: &'a I18n) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("color-heading")).size(typography::TITLE_SM);

    let mut buttons = Row::new().spacing(spacing::XXS);
    for (index, variant) in product.variants.iter().enumerate() {
        let is_selected = state.selected_variant_index() == Some(index);
        buttons = buttons.push(
            button(Text::new(variant.name.as_str()).size(typography::BODY))
                .on_press(Message::VariantSelected(index))
                .padding([spacing::XXS, spacing::SM])
                .style(toggle_style(is_selected)),
        );
    }

    Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(buttons)
        .into()
}

/// SELECT A SIZE heading plus one button per size of the selected variant.
fn size_row<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("size-heading")).size(typography::TITLE_SM);

    let mut buttons = Row::new().spacing(spacing::XXS);
    for size in state.available_sizes() {
        let is_selected = state.selected_size().map(|s| &s.id) == Some(&size.id);
        buttons = buttons.push(
            button(Text::new(size.name.as_str()).size(typography::BODY))
                .on_press(Message::SizeSelected(size.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(toggle_style(is_selected)),
        );
    }

    Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(buttons)
        .into()
}

/// Picks the selected/unselected style for toggle-group buttons.
fn toggle_style(
    is_selected: bool,
) -> fn(&Theme, button::Status) -> button::Style {
    if is_selected {
        styles::button::selected
    } else {
        styles::button::unselected
    }
}
