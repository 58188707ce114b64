// SPDX-License-Identifier: MPL-2.0
//! Update logic and effect execution for the application.
//!
//! Component `handle` calls are pure state transitions; everything that
//! touches the network or the notification/diagnostics subsystems funnels
//! through [`run_effect`] here.

use super::{App, Message};
use crate::api::AddToCartRequest;
use crate::catalog::EntityId;
use crate::diagnostics::{ErrorEvent, UserAction, WarningEvent, WarningType};
use crate::error::Error;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::product_detail::{self, Effect};
use iced::widget::image;
use iced::Task;

/// Routes a top-level message and returns the follow-up work.
pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    let task = match message {
        Message::Detail(message) => {
            log_detail_action(app, &message);
            let effect = app.detail.handle(message);
            run_effect(app, effect)
        }
        Message::Navbar(message) => match navbar::update(message, &mut app.lookup_value) {
            navbar::Event::None => Task::none(),
            navbar::Event::LoadProduct(id) => request_product(app, id, "lookup_bar"),
        },
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            if app.detail.is_loading() {
                let effect = app.detail.handle(product_detail::Message::SpinnerTick);
                debug_assert_eq!(effect, Effect::None);
            }
            Task::none()
        }
    };

    // Keep the event log current without waiting for the next tick.
    app.diagnostics.process_pending();

    task
}

/// Records selection interactions so the log shows what the user did right
/// before a failure.
fn log_detail_action(app: &App, message: &product_detail::Message) {
    match message {
        product_detail::Message::VariantSelected(_) => {
            app.diagnostics.handle().log_action(UserAction::SelectVariant);
        }
        product_detail::Message::SizeSelected(_) => {
            app.diagnostics.handle().log_action(UserAction::SelectSize);
        }
        _ => {}
    }
}

/// Starts a product load, recording where the request came from.
pub(super) fn request_product(app: &mut App, id: EntityId, source: &str) -> Task<Message> {
    app.diagnostics.handle().log_action(UserAction::LoadProduct {
        source: Some(source.to_string()),
    });
    let effect = app
        .detail
        .handle(product_detail::Message::ProductRequested(id));
    run_effect(app, effect)
}

/// Executes a component effect against the application's services.
pub(super) fn run_effect(app: &mut App, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::FetchProduct { id, generation } => fetch_product(app, id, generation),
        Effect::FetchImage { url, generation } => fetch_image(app, url, generation),
        Effect::SubmitCart(request) => submit_cart(app, request),
        Effect::ShowSuccessNotification { key } => {
            app.notifications.push(Notification::success(key));
            Task::none()
        }
        Effect::ShowErrorNotification { key } => {
            app.notifications.push(Notification::error(key));
            Task::none()
        }
        Effect::UnexpectedCartStatus { status } => {
            unexpected_cart_status(app, status);
            Task::none()
        }
        Effect::RecordError {
            error_type,
            message,
        } => {
            app.diagnostics
                .handle()
                .log_error(ErrorEvent::new(error_type, message));
            Task::none()
        }
    }
}

fn fetch_product(app: &mut App, id: EntityId, generation: u64) -> Task<Message> {
    let Some(client) = app.client.clone() else {
        return client_unavailable(generation);
    };
    Task::perform(
        async move { client.fetch_product_variants(&id).await },
        move |result| {
            Message::Detail(product_detail::Message::ProductLoaded { generation, result })
        },
    )
}

fn fetch_image(app: &mut App, url: String, generation: u64) -> Task<Message> {
    let Some(client) = app.client.clone() else {
        // Without a client the slot just resolves to the placeholder.
        return Task::done(Message::Detail(product_detail::Message::ImageLoaded {
            generation,
            result: Err(Error::Http("api client unavailable".into())),
        }));
    };
    Task::perform(
        async move {
            client
                .fetch_image(&url)
                .await
                .map(image::Handle::from_bytes)
        },
        move |result| Message::Detail(product_detail::Message::ImageLoaded { generation, result }),
    )
}

fn submit_cart(app: &mut App, request: AddToCartRequest) -> Task<Message> {
    app.diagnostics.handle().log_action(UserAction::AddToCart);
    let Some(client) = app.client.clone() else {
        return Task::done(Message::Detail(product_detail::Message::CartSubmitted(Err(
            Error::Http("api client unavailable".into()),
        ))));
    };
    Task::perform(
        async move { client.add_to_cart(&request).await },
        |result| Message::Detail(product_detail::Message::CartSubmitted(result)),
    )
}

/// The cart endpoint answered outside 201/202. Always lands in the log;
/// only reaches the user when the config asks for it.
fn unexpected_cart_status(app: &mut App, status: u16) {
    if app.notify_unexpected_status {
        app.notifications.push(
            Notification::warning("notification-cart-unexpected-status")
                .with_arg("status", status.to_string())
                .with_warning_type(WarningType::CartUnexpectedStatus),
        );
    } else {
        app.diagnostics.handle().log_warning(WarningEvent::new(
            WarningType::CartUnexpectedStatus,
            format!("add-to-cart answered with status {status}"),
        ));
    }
}

/// Synthesizes a failed load when no API client could be built, so the view
/// settles on not-found instead of spinning forever.
fn client_unavailable(generation: u64) -> Task<Message> {
    Task::done(Message::Detail(product_detail::Message::ProductLoaded {
        generation,
        result: Err(Error::Http("api client unavailable".into())),
    }))
}
