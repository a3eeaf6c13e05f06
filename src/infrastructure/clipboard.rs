// SPDX-License-Identifier: MPL-2.0
//! System clipboard adapter.
//!
//! On X11 and Wayland the clipboard content is served by the process that
//! wrote it, so the `arboard` handle is kept for the lifetime of the adapter
//! instead of being reopened for every write.

use crate::application::port::ClipboardWriter;
use crate::error::ClipboardError;

/// Plain-text writer for the desktop clipboard.
///
/// The OS handle is opened on the first write. A failed open is retried on
/// the next write.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        let clipboard = match self.handle.take() {
            Some(clipboard) => clipboard,
            None => {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                log::debug!("system clipboard opened");
                clipboard
            }
        };
        Ok(self.handle.insert(clipboard))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
