// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` keeps the visible notifications (newest first) and drops
//! each one once its fade schedule has run out. Every notification runs on
//! its own clock; there is no cap, no queue and no manual dismissal.

use super::lifecycle::{FadeSchedule, Phase};
use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Manages the visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    schedule: FadeSchedule,
}

impl Manager {
    /// Creates a new empty notification manager with the default schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty notification manager with a custom schedule.
    #[must_use]
    pub fn with_schedule(schedule: FadeSchedule) -> Self {
        Self {
            visible: VecDeque::new(),
            schedule,
        }
    }

    #[must_use]
    pub fn schedule(&self) -> FadeSchedule {
        self.schedule
    }

    /// Inserts a notification at the head of the visible list.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Error => log::debug!(
                "error notification pushed: {}",
                notification.message_key()
            ),
            Severity::Info => log::trace!(
                "info notification pushed: {}",
                notification.message_key()
            ),
        }
        self.visible.push_front(notification);
    }

    /// Builds and pushes a notification without arguments.
    pub fn notify(&mut self, severity: Severity, message_key: impl Into<String>) -> NotificationId {
        let notification = Notification::new(severity, message_key);
        let id = notification.id();
        self.push(notification);
        id
    }

    /// Drops every notification whose schedule has completed at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let schedule = self.schedule;
        self.visible
            .retain(|n| schedule.phase_at(n.age_at(now)) != Phase::Removed);
    }

    /// Phase of `notification` at `now`.
    #[must_use]
    pub fn phase_of(&self, notification: &Notification, now: Instant) -> Phase {
        self.schedule.phase_at(notification.age_at(now))
    }

    /// Opacity of `notification` at `now`.
    #[must_use]
    pub fn opacity_of(&self, notification: &Notification, now: Instant) -> f32 {
        self.schedule.opacity_at(notification.age_at(now))
    }

    /// Returns the currently visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }
}
