// SPDX-License-Identifier: MPL-2.0
//! Encode/decode use case.
//!
//! A [`Converter`] runs the codec for one user action, copies the result to
//! the clipboard and reports the outcome through the notification manager.
//! Exactly one notification is pushed per call.

use crate::application::port::ClipboardWriter;
use crate::codec::{self, Operation};
use crate::config::DEFAULT_COPY_RESULTS;
use crate::notifications::{Manager, Notification, Severity};

/// Orchestrates codec calls, clipboard writes and notifications.
pub struct Converter {
    clipboard: Box<dyn ClipboardWriter>,
    copy_results: bool,
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("copy_results", &self.copy_results)
            .finish_non_exhaustive()
    }
}

impl Converter {
    #[must_use]
    pub fn new(clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self {
            clipboard,
            copy_results: DEFAULT_COPY_RESULTS,
        }
    }

    /// Enables or disables copying successful results to the clipboard.
    #[must_use]
    pub fn with_copy_results(mut self, copy_results: bool) -> Self {
        self.copy_results = copy_results;
        self
    }

    #[must_use]
    pub fn copy_results(&self) -> bool {
        self.copy_results
    }

    /// Runs `operation` on `source`.
    ///
    /// Returns the converted text on success, even when the clipboard write
    /// failed, and `None` when the codec rejected the input. A rejected input
    /// never reaches the clipboard.
    pub fn convert(
        &mut self,
        operation: Operation,
        source: Option<&str>,
        notifications: &mut Manager,
    ) -> Option<String> {
        let output = match codec::run(operation, source) {
            Ok(output) => output,
            Err(err) => {
                log::warn!("{} failed: {err}", operation.verb());
                notifications.push(Notification::from_codec_error(&err));
                return None;
            }
        };
        log::debug!(
            "{} produced {} bytes from {} bytes",
            operation.verb(),
            output.len(),
            source.map_or(0, str::len)
        );

        if !self.copy_results {
            notifications.notify(Severity::Info, operation.done_key());
            return Some(output);
        }

        match self.clipboard.set_text(&output) {
            Ok(()) => {
                notifications.notify(Severity::Info, operation.copied_key());
            }
            Err(err) => {
                log::warn!("could not copy {} result: {err}", operation.verb());
                notifications.push(Notification::from_clipboard_error(&err));
            }
        }
        Some(output)
    }
}
