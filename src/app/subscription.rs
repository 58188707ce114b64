// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for the loading spinner and
/// notification auto-dismiss.
///
/// The tick only runs while there is something to animate or expire, so an
/// idle window schedules no work.
pub fn create_tick_subscription(
    is_loading: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
