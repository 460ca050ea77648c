//! Atomic write primitive
//!
//! Uses temp→rename so a fixture is never left half-written.

use crate::errors::{write_error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Atomically replace `target_path` with `content`
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }

    let temp_path = temp_path_for(target_path);
    fs::write(&temp_path, content).map_err(|e| write_error(&temp_path, e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(target_path, e));
    }
    Ok(())
}

/// Sibling temp file, `users.json` → `.users.json.tmp`
fn temp_path_for(target_path: &Path) -> PathBuf {
    let name = target_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target_path.with_file_name(format!(".{}.tmp", name))
}
