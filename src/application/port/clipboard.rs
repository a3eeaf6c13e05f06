// SPDX-License-Identifier: MPL-2.0
//! Clipboard port definition.
//!
//! This module defines the [`ClipboardWriter`] trait. The system adapter lives
//! in [`crate::infrastructure::clipboard`]; [`MemoryClipboard`] keeps the text
//! in memory and is used by tests and headless runs.

use crate::error::ClipboardError;
use std::cell::RefCell;
use std::rc::Rc;

/// Writes plain text to a clipboard.
pub trait ClipboardWriter {
    /// Replaces the clipboard content with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if no clipboard is reachable or the write
    /// is refused.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<String>,
    writes: usize,
    failure: Option<ClipboardError>,
}

/// In-memory clipboard.
///
/// Clones share the same buffer: keep one handle to inspect what was written
/// after moving another into a [`Converter`](crate::application::conversion::Converter).
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard rejecting every write with `error`.
    #[must_use]
    pub fn failing(error: ClipboardError) -> Self {
        let clipboard = Self::new();
        clipboard.fail_with(Some(error));
        clipboard
    }

    /// Makes subsequent writes fail with `error`, or succeed again with `None`.
    pub fn fail_with(&self, error: Option<ClipboardError>) {
        self.state.borrow_mut().failure = error;
    }

    /// Last text written, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.state.borrow().contents.clone()
    }

    /// Number of successful writes.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut state = self.state.borrow_mut();
        if let Some(error) = &state.failure {
            return Err(error.clone());
        }
        state.contents = Some(text.to_owned());
        state.writes += 1;
        Ok(())
    }
}
