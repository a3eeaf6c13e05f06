// SPDX-License-Identifier: MPL-2.0
//! Time subscriptions for the application.

use super::Message;
use crate::config::NOTIFICATION_TICK_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks every [`NOTIFICATION_TICK_MS`] while a notification is on screen,
/// and not at all otherwise.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
