//! mockdrift store - fixture directories on disk
//!
//! Provides:
//! - Sorted directory listings of fixture files
//! - Loading and validating fixture documents
//! - Pretty-printed, atomic write-back of mock fixtures
//! - Verbatim copies of real fixtures missing from the mock side

pub mod atomic;
pub mod errors;
pub mod fixtures;

pub use fixtures::{copy_fixture, list_fixture_names, load_dataset, write_dataset, write_document};
