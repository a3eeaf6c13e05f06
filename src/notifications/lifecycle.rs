// SPDX-License-Identifier: MPL-2.0
//! Fade-in / hold / fade-out timing for notifications.

use crate::config::{DEFAULT_FADE_IN_MS, DEFAULT_FADE_OUT_MS, DEFAULT_HOLD_MS};
use std::time::Duration;

/// Display phase of a notification, derived from its age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Just pushed, opacity rising from 0 to 1.
    Created,
    /// Fully opaque.
    Visible,
    /// Opacity falling from 1 to 0.
    Fading,
    /// Schedule complete; the notification must be dropped.
    Removed,
}

/// Durations of the three display phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeSchedule {
    pub fade_in: Duration,
    pub hold: Duration,
    pub fade_out: Duration,
}

impl Default for FadeSchedule {
    fn default() -> Self {
        Self::from_millis(DEFAULT_FADE_IN_MS, DEFAULT_HOLD_MS, DEFAULT_FADE_OUT_MS)
    }
}

impl FadeSchedule {
    #[must_use]
    pub const fn from_millis(fade_in: u64, hold: u64, fade_out: u64) -> Self {
        Self {
            fade_in: Duration::from_millis(fade_in),
            hold: Duration::from_millis(hold),
            fade_out: Duration::from_millis(fade_out),
        }
    }

    /// Time from push to removal.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.fade_in + self.hold + self.fade_out
    }

    /// Phase of a notification that has been alive for `age`.
    #[must_use]
    pub fn phase_at(&self, age: Duration) -> Phase {
        if age < self.fade_in {
            Phase::Created
        } else if age < self.fade_in + self.hold {
            Phase::Visible
        } else if age < self.total() {
            Phase::Fading
        } else {
            Phase::Removed
        }
    }

    /// Opacity in `[0.0, 1.0]` of a notification that has been alive for `age`.
    #[must_use]
    pub fn opacity_at(&self, age: Duration) -> f32 {
        match self.phase_at(age) {
            Phase::Created => ratio(age, self.fade_in),
            Phase::Visible => 1.0,
            Phase::Fading => 1.0 - ratio(age - self.fade_in - self.hold, self.fade_out),
            Phase::Removed => 0.0,
        }
    }
}

fn ratio(elapsed: Duration, span: Duration) -> f32 {
    if span.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
}
