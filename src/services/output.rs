//! Export output service.
//!
//! This module centralizes where generated text goes once it leaves the
//! formatters: files in an output directory or the system clipboard.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(target_os = "linux")]
use std::time::Instant;
use tracing::{debug, info, warn};

#[cfg(target_os = "linux")]
use crate::constants::CLIPBOARD_HOLD;
use crate::export::ExportFormat;

/// Service for writing generated text to its destinations.
pub struct OutputService;

impl OutputService {
    /// Writes an export to `dir` under the format's fixed file name.
    ///
    /// The directory is created if missing. This performs an atomic write
    /// using a temp file + rename pattern, so a reader never sees a partially
    /// written file.
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written file
    /// * `Err(...)` - Directory creation, write or rename failure
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use tokenforge::export::ExportFormat;
    /// use tokenforge::services::OutputService;
    ///
    /// let path = OutputService::write_export(Path::new("out"), ExportFormat::Css, ":root {\n}\n")?;
    /// println!("Wrote {}", path.display());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn write_export(dir: &Path, format: ExportFormat, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

        let path = dir.join(format.file_name());
        let temp_path = dir.join(format!(".{}.tmp", format.file_name()));

        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e)
                .with_context(|| format!("Failed to rename temp file to: {}", path.display()));
        }

        info!(export = %format, path = %path.display(), "Wrote export");
        Ok(path)
    }

    /// Places `text` on the system clipboard.
    ///
    /// Clipboard access is best effort: a failure is logged and otherwise
    /// ignored, so callers always report the copy as done. Returns whether
    /// the clipboard actually accepted the text.
    ///
    /// On Linux the X11 and Wayland selections live only as long as the
    /// process that owns them. The copy therefore blocks until another
    /// program (usually a clipboard manager) takes the contents over, or
    /// until [`crate::constants::CLIPBOARD_HOLD`] passes. Without a
    /// clipboard manager the text is gone once the process exits.
    pub fn copy_to_clipboard(text: &str) -> bool {
        let copied = arboard::Clipboard::new()
            .and_then(|mut clipboard| set_clipboard_text(&mut clipboard, text));

        match copied {
            Ok(()) => {
                debug!(bytes = text.len(), "Copied text to clipboard");
                true
            }
            Err(e) => {
                warn!("Failed to copy to clipboard: {e}");
                false
            }
        }
    }
}

#[cfg(target_os = "linux")]
fn set_clipboard_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard
        .set()
        .wait_until(Instant::now() + CLIPBOARD_HOLD)
        .text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_clipboard_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
