// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: a
//! screen owns its widget state, turns its messages into events, and lets the
//! application decide what to do with them.
//!
//! # Screens
//!
//! - [`converter`] - Source field, Encode/Decode buttons and result field
//!
//! # Shared Infrastructure
//!
//! - [`toast`] - Rendering of the notification overlay
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod converter;
pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod toast;
