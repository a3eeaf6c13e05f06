// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! system clipboard.
//!
//! # Available Adapters
//!
//! - [`clipboard`]: System clipboard via `arboard` (implements [`ClipboardWriter`])
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Platform errors are mapped to domain errors at this boundary
//!
//! [`ClipboardWriter`]: crate::application::port::ClipboardWriter

pub mod clipboard;

pub use clipboard::SystemClipboard;
