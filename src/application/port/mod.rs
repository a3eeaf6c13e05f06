// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`clipboard`]: Plain-text clipboard writes
//!
//! # Design Notes
//!
//! - Traits use crate types only (no Iced handles, no `arboard` types)
//! - Methods return `Result` with domain error types

pub mod clipboard;

pub use clipboard::{ClipboardWriter, MemoryClipboard};
