// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Fade-in, hold and fade-out durations of toasts
//! - **Clipboard**: Whether conversion results are copied
//! - **Window**: Initial and minimum window size
//! - **Tick**: Refresh period while toasts are animating

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Duration of the toast fade-in, in milliseconds.
pub const DEFAULT_FADE_IN_MS: u64 = 500;

/// Time a toast stays fully opaque, in milliseconds.
pub const DEFAULT_HOLD_MS: u64 = 5000;

/// Duration of the toast fade-out, in milliseconds.
pub const DEFAULT_FADE_OUT_MS: u64 = 500;

/// Upper bound accepted for any single phase, in milliseconds.
pub const MAX_PHASE_MS: u64 = 60_000;

// ==========================================================================
// Clipboard Defaults
// ==========================================================================

/// Conversion results are copied to the clipboard unless disabled.
pub const DEFAULT_COPY_RESULTS: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Tick period while at least one toast is on screen, in milliseconds.
pub const NOTIFICATION_TICK_MS: u64 = 50;

const _: () = {
    assert!(DEFAULT_FADE_IN_MS <= MAX_PHASE_MS);
    assert!(DEFAULT_HOLD_MS <= MAX_PHASE_MS);
    assert!(DEFAULT_FADE_OUT_MS <= MAX_PHASE_MS);
    assert!(NOTIFICATION_TICK_MS < DEFAULT_FADE_IN_MS);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
