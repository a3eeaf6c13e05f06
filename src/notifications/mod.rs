// SPDX-License-Identifier: MPL-2.0
//! Transient notifications reporting the outcome of a conversion.
//!
//! The model here is independent of any UI toolkit: a notification is a
//! message key, a severity and a creation instant. Its visual state is
//! derived from its age through a [`FadeSchedule`]:
//!
//! ```text
//! CREATED (fade-in) -> VISIBLE (hold) -> FADING (fade-out) -> REMOVED
//! ```
//!
//! The UI layer calls [`Manager::tick_at`] periodically and renders each visible
//! notification with the opacity returned by [`Manager::opacity_of`].
//!
//! # Usage
//!
//! ```
//! use iced_base64::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::info("notification-encode-copied"));
//! manager.push(Notification::error("error-decode-malformed").with_arg("reason", "bad"));
//!
//! // Newest first
//! let keys: Vec<_> = manager.visible().map(|n| n.message_key()).collect();
//! assert_eq!(keys, ["error-decode-malformed", "notification-encode-copied"]);
//! ```

mod lifecycle;
mod manager;
mod notification;

pub use lifecycle::{FadeSchedule, Phase};
pub use manager::Manager;
pub use notification::{Notification, NotificationId, Severity};
