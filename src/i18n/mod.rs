// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded in the binary (`assets/i18n/*.ftl`)
//! - Message interpolation (`{ $reason }`)
//! - Fallback to `en-US`, then to the raw key, when translations are missing

pub mod fluent;
