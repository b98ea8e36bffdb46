//! Clipboard access for copying the shortened link.

use arboard::Clipboard;

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Connects to the system clipboard. Fails on headless sessions.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e))
    }
}

/// One-off copy; connects, writes, and drops the handle.
pub fn copy_text(text: &str) -> Result<(), String> {
    let mut handler =
        ClipboardHandler::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
    handler.set_text(text)
}
