// iconforge - platform/fs.rs
//
// Filesystem helpers for the emitters. Every failure is wrapped with the
// path and the operation that failed so the driver can report it verbatim.
// Existing files are overwritten unconditionally.

use crate::util::error::{IconForgeError, Result};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// Create `dir` and any missing parents. An existing directory is fine.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| IconForgeError::Io {
        path: dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })
}

/// Encode `icon` as PNG at `path`.
pub fn save_png(icon: &DynamicImage, path: &Path) -> Result<()> {
    icon.save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconForgeError::Encode {
            path: path.to_path_buf(),
            source: e,
        })?;
    tracing::debug!(
        path = %path.display(),
        width = icon.width(),
        height = icon.height(),
        "Wrote PNG"
    );
    Ok(())
}

/// Write a small text file (XML descriptors).
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| IconForgeError::Io {
        path: path.to_path_buf(),
        operation: "write file",
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote text file");
    Ok(())
}
