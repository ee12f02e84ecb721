//! Copying the display to the system clipboard.

use arboard::Clipboard;

use super::error::{CalcError, Result};

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| CalcError::clipboard(format!("failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| CalcError::clipboard(format!("failed to copy to clipboard: {}", e)))
}
