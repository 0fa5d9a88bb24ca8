//! Clipboard copy with automatic clearing.
//!
//! On X11/Wayland the clipboard contents are served by the owning
//! process, so we keep running until the clear deadline passes.

use std::thread;
use std::time::Duration;

use arboard::Clipboard;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::errors::{Result, SeedSealError};

/// Copy `text` to the clipboard and clear it after `clear_after_secs`.
///
/// The clipboard is only cleared if it still holds our text, so anything
/// the user copied in the meantime is left alone.  `0` leaves the text in
/// place and returns immediately.
pub fn copy_and_clear(text: &str, clear_after_secs: u64) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| SeedSealError::ClipboardError(format!("unavailable: {e}")))?;

    clipboard
        .set_text(text)
        .map_err(|e| SeedSealError::ClipboardError(format!("copy failed: {e}")))?;
    output::status("Copied to clipboard");

    if clear_after_secs == 0 {
        return Ok(());
    }

    output::info(&format!(
        "Clipboard will be cleared in {clear_after_secs} seconds"
    ));
    thread::sleep(Duration::from_secs(clear_after_secs));

    let current = Zeroizing::new(clipboard.get_text().unwrap_or_default());
    if current.as_str() == text {
        clipboard
            .clear()
            .map_err(|e| SeedSealError::ClipboardError(format!("clear failed: {e}")))?;
        tracing::info!("clipboard cleared");
    }

    Ok(())
}
