//! Reconciliation session state.
//!
//! A session owns the directory listings and the three accumulators a run
//! reports on: real files missing from the mock side, file pairs with
//! differences, and mock files written back.

use mockdrift_core::diff::{filtered_changes, ExceptionFilter};
use mockdrift_core::errors::{DriftError, Result};
use mockdrift_core::model::Dataset;
use mockdrift_core::reconcile::Presenter;
use mockdrift_core::{log_op_end, log_op_error, log_op_start};
use mockdrift_store::{list_fixture_names, load_dataset};
use std::path::PathBuf;

/// Everything a session needs to know before it starts.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub mock_dir: PathBuf,
    pub real_dir: PathBuf,
    pub filter: ExceptionFilter,
    /// Spaces per level when writing fixtures
    pub indent: usize,
}

/// Operator-facing output of a run, on top of the per-endpoint review.
pub trait SessionView: Presenter {
    /// Field names excluded from comparison
    fn ignored_fields(&mut self, fields: &[String]);

    /// Real files with no mock counterpart; empty means none are missing
    fn missing_files(&mut self, names: &[String]);

    /// Mock files that differ from their real counterpart; empty means none do
    fn files_with_differences(&mut self, names: &[String]);

    /// A file pair with differences is about to be reviewed
    fn file_header(&mut self, name: &str);

    /// A file pair has no differences after filtering
    fn file_skipped(&mut self, name: &str);

    /// Writing a fixture failed; the run continues
    fn write_failed(&mut self, name: &str, error: &DriftError);

    /// Mock files written by the interactive review
    fn updated_files(&mut self, names: &[String]);
}

/// One run over a mock directory and a real directory.
#[derive(Debug)]
pub struct ReconciliationSession {
    config: SessionConfig,
    mock_files: Vec<String>,
    real_files: Vec<String>,
    missing_in_mock: Vec<String>,
    files_with_diffs: Vec<String>,
    updated_files: Vec<String>,
}

impl ReconciliationSession {
    /// List both directories.
    ///
    /// # Errors
    ///
    /// `DirectoryUnreadable` naming the first directory that cannot be listed.
    pub fn open(config: SessionConfig) -> Result<Self> {
        let mock_files = list_fixture_names(&config.mock_dir)?;
        let real_files = list_fixture_names(&config.real_dir)?;
        tracing::debug!(
            mock = mock_files.len(),
            real = real_files.len(),
            "fixture directories listed"
        );
        Ok(Self {
            config,
            mock_files,
            real_files,
            missing_in_mock: Vec::new(),
            files_with_diffs: Vec::new(),
            updated_files: Vec::new(),
        })
    }

    /// Record missing files and file pairs with differences.
    ///
    /// Any malformed document stops the scan; nothing is written before it.
    ///
    /// # Errors
    ///
    /// `ReadFailed`, `MalformedDocument` or `MissingField` for the first bad file.
    pub fn scan(&mut self) -> Result<()> {
        log_op_start!("scan_fixtures");
        let start = std::time::Instant::now();

        self.scan_impl().map_err(|e| {
            log_op_error!(
                "scan_fixtures",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "scan_fixtures",
            duration_ms = start.elapsed().as_millis() as u64,
            missing = self.missing_in_mock.len(),
            differing = self.files_with_diffs.len()
        );
        Ok(())
    }

    fn scan_impl(&mut self) -> Result<()> {
        self.missing_in_mock.clear();
        self.files_with_diffs.clear();

        for real_name in &self.real_files {
            if !self.mock_files.contains(real_name) {
                self.missing_in_mock.push(real_name.clone());
            }
        }

        for name in self.pairs() {
            let (mock, real) = self.load_pair(&name)?;
            if !filtered_changes(&mock, &real, &self.config.filter).is_empty()
                && !self.files_with_diffs.contains(&name)
            {
                self.files_with_diffs.push(name);
            }
        }
        Ok(())
    }

    /// Names present in both directories, in real-listing order.
    pub fn pairs(&self) -> Vec<String> {
        let mut pairs = Vec::new();
        for real_name in &self.real_files {
            for mock_name in &self.mock_files {
                if real_name == mock_name {
                    pairs.push(mock_name.clone());
                }
            }
        }
        pairs
    }

    /// Load the mock and real documents sharing `name`.
    ///
    /// # Errors
    ///
    /// See [`load_dataset`].
    pub fn load_pair(&self, name: &str) -> Result<(Dataset, Dataset)> {
        let mock = load_dataset(&self.mock_path(name))?;
        let real = load_dataset(&self.real_path(name))?;
        Ok((mock, real))
    }

    pub fn mock_path(&self, name: &str) -> PathBuf {
        self.config.mock_dir.join(name)
    }

    pub fn real_path(&self, name: &str) -> PathBuf {
        self.config.real_dir.join(name)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn missing_in_mock(&self) -> &[String] {
        &self.missing_in_mock
    }

    pub fn files_with_diffs(&self) -> &[String] {
        &self.files_with_diffs
    }

    pub fn updated_files(&self) -> &[String] {
        &self.updated_files
    }

    /// Record a written mock file once, however many endpoints changed in it
    pub fn mark_updated(&mut self, name: &str) {
        if !self.updated_files.iter().any(|n| n == name) {
            self.updated_files.push(name.to_string());
        }
    }

    /// Forget missing files once they have been created on the mock side
    pub fn clear_missing(&mut self) {
        self.missing_in_mock.clear();
    }
}
