//! Fixture files on disk.

use crate::atomic::atomic_write;
use crate::errors::{directory_error, read_error, Result};
use mockdrift_core::model::Dataset;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Names of the regular files in `dir`, sorted.
///
/// Subdirectories are skipped, and so are names that are not valid UTF-8.
///
/// # Errors
///
/// `DirectoryUnreadable` naming `dir` if it is missing or cannot be listed.
pub fn list_fixture_names(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| directory_error(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| directory_error(dir, e))?;
        let is_file = fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::warn!(name = ?raw, "skipping fixture with a non UTF-8 name"),
        }
    }
    names.sort();

    tracing::debug!(dir = %dir.display(), record_count = names.len(), "fixtures listed");
    Ok(names)
}

/// Read and validate a fixture document.
///
/// # Errors
///
/// `ReadFailed` when the file cannot be read, `MalformedDocument` or
/// `MissingField` (naming `path`) when its content is not a fixture.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let text = fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    Dataset::parse(&text, &path.display().to_string())
}

/// Pretty-print `value` with `indent` spaces and atomically write it to `path`.
///
/// # Errors
///
/// `Serialization` if encoding fails, `WriteFailed` if the write does.
pub fn write_document(path: &Path, value: &Value, indent: usize) -> Result<()> {
    let indent = vec![b' '; indent];
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut serializer)?;

    atomic_write(path, &out)?;
    tracing::debug!(file = %path.display(), bytes = out.len(), "fixture written");
    Ok(())
}

/// Write a fixture document back to `path`.
///
/// # Errors
///
/// See [`write_document`].
pub fn write_dataset(path: &Path, dataset: &Dataset, indent: usize) -> Result<()> {
    write_document(path, &dataset.to_value(), indent)
}

/// Copy a fixture byte for byte.
///
/// # Errors
///
/// `ReadFailed` for the source, `WriteFailed` for the destination.
pub fn copy_fixture(from: &Path, to: &Path) -> Result<()> {
    let bytes = fs::read(from).map_err(|e| read_error(from, e))?;
    atomic_write(to, &bytes)
}
