//! Clipboard hand-off for the exported report.

use crate::error::Result;
use arboard::Clipboard;

/// Place report text on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
