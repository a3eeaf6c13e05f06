// SPDX-License-Identifier: MPL-2.0
//! `iced_base64` is a small desktop utility, built with the Iced GUI framework,
//! that converts text to standard Base64 and back.
//!
//! Every successful conversion is shown in the result field and copied to the
//! system clipboard; each action is reported by a toast that fades in, stays
//! for a few seconds and fades out.
//!
//! # Layers
//!
//! - [`codec`] - Pure Base64 encode/decode with input validation
//! - [`notifications`] - Platform-agnostic notification model and lifecycle
//! - [`application`] - Conversion use case and ports
//! - [`infrastructure`] - System clipboard adapter
//! - [`app`], [`ui`] - Iced application shell and widgets
//! - [`config`], [`i18n`], [`error`] - Settings, localization and errors

pub mod app;
pub mod application;
pub mod codec;
pub mod config;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod notifications;
pub mod ui;
