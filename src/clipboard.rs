//! Clipboard access
//!
//! Copying is best-effort: a missing clipboard (headless session, Wayland
//! without a data-control protocol) is reported but never fatal.
//!
//! On X11 and Wayland the copied text is served by whoever owns the
//! clipboard handle, so [`SystemClipboard`] opens one handle on first use
//! and keeps it for the life of the app.

use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to copy: {0}")]
    Copy(String),
}

pub trait Clipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Something that can take text, such as an open `arboard::Clipboard`
pub trait ClipboardHandle {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

impl ClipboardHandle for arboard::Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        arboard::Clipboard::set_text(self, text.to_string()).map_err(|e| e.to_string())
    }
}

/// The desktop clipboard, opened lazily and then reused
pub struct SystemClipboard<H = arboard::Clipboard> {
    handle: Mutex<Option<H>>,
    open: fn() -> Result<H, String>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::with_opener(|| arboard::Clipboard::new().map_err(|e| e.to_string()))
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> SystemClipboard<H> {
    fn with_opener(open: fn() -> Result<H, String>) -> Self {
        Self {
            handle: Mutex::new(None),
            open,
        }
    }
}

impl<H: ClipboardHandle> Clipboard for SystemClipboard<H> {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut slot = self
            .handle
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;

        if slot.is_none() {
            let handle = (self.open)().map_err(ClipboardError::Unavailable)?;
            tracing::debug!("Opened system clipboard");
            *slot = Some(handle);
        }

        match slot.as_mut() {
            Some(handle) => handle.set_text(text).map_err(ClipboardError::Copy),
            None => Err(ClipboardError::Unavailable("no clipboard handle".to_string())),
        }
    }
}
