//! Atomic file writes.
//!
//! Content goes to `.{filename}.tmp` next to the target, is synced to disk,
//! then renamed over the target. Source and destination must be on the same
//! filesystem for the rename to be atomic. A crash may leave the temporary
//! file behind.

use crate::error::{MailPatchError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// Bytes are written unchanged; patch text with mixed line endings is
/// preserved exactly.
///
/// # Example
///
/// ```no_run
/// use mailpatch::fs::atomic_write;
///
/// atomic_write("out/0001-Fix.patch", b"diff --git a/x b/x\r\n")?;
/// # Ok::<(), mailpatch::error::MailPatchError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| MailPatchError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    // std's rename replaces an existing target on both POSIX and Windows.
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MailPatchError::io(path, e)
    })?;

    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            MailPatchError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| MailPatchError::io(path, e))?;

    let result = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = result {
        let _ = fs::remove_file(path);
        return Err(MailPatchError::io(path, e));
    }

    Ok(())
}
