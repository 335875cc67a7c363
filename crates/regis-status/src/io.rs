//! Atomic file replacement via write-to-temp-then-rename

use std::path::Path;

/// Write data atomically using temp file + rename
///
/// A reader opening `path` at any point sees either the previous content or
/// the new content, never a partial write. Some platforms refuse to rename
/// onto an existing file, so a remove-then-rename fallback is attempted once.
/// On any failure the temp file is removed before the error is returned.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    if let Err(err) = write_then_rename(&temp_path, path, data) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(err);
    }
    Ok(())
}

fn write_then_rename(temp_path: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    std::fs::write(temp_path, data)?;
    match std::fs::rename(temp_path, path) {
        Ok(()) => Ok(()),
        Err(_) if path.exists() => {
            std::fs::remove_file(path)?;
            std::fs::rename(temp_path, path)
        }
        Err(err) => Err(err),
    }
}
