//! Error helpers for mockdrift-store
//!
//! Maps `std::io` failures onto the core error taxonomy with the offending path.

use mockdrift_core::errors::DriftError;
use std::path::Path;

pub use mockdrift_core::errors::Result;

/// A fixture directory could not be listed
pub fn directory_error(dir: &Path, err: std::io::Error) -> DriftError {
    DriftError::DirectoryUnreadable {
        path: dir.display().to_string(),
        reason: err.to_string(),
    }
}

/// A fixture file could not be read
pub fn read_error(path: &Path, err: std::io::Error) -> DriftError {
    DriftError::ReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// A fixture file could not be written
pub fn write_error(path: &Path, err: std::io::Error) -> DriftError {
    DriftError::WriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
