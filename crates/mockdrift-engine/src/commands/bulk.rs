//! Non-interactive paths: apply every difference, create missing fixtures.

use crate::session::ReconciliationSession;
use mockdrift_core::diff::filtered_changes;
use mockdrift_core::errors::{DriftError, Result};
use mockdrift_core::{log_op_end, log_op_start};
use mockdrift_store::{copy_fixture, write_dataset};

/// Files a bulk operation wrote, and the ones it could not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkReport {
    pub written: Vec<String>,
    pub failed: Vec<(String, DriftError)>,
}

impl BulkReport {
    fn record(&mut self, name: &str, result: Result<()>) {
        match result {
            Ok(()) => self.written.push(name.to_string()),
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "fixture not written");
                self.failed.push((name.to_string(), e));
            }
        }
    }
}

/// Replace every mock document that differs from its real counterpart.
///
/// The whole real document is written, not only the differing endpoints.
/// Pairs whose only changes are on ignored fields are left alone.
///
/// # Errors
///
/// Fails on unreadable or malformed documents. Write failures are collected
/// in the report instead.
pub fn apply_all(session: &mut ReconciliationSession) -> Result<BulkReport> {
    log_op_start!("apply_all");
    let start = std::time::Instant::now();

    let mut report = BulkReport::default();
    for name in session.pairs() {
        let (mock, real) = session.load_pair(&name)?;
        if filtered_changes(&mock, &real, &session.config().filter).is_empty() {
            continue;
        }
        let result = write_dataset(&session.mock_path(&name), &real, session.config().indent);
        report.record(&name, result);
    }

    log_op_end!(
        "apply_all",
        duration_ms = start.elapsed().as_millis() as u64,
        written = report.written.len(),
        failed = report.failed.len()
    );
    Ok(report)
}

/// Copy every real fixture with no mock counterpart into the mock directory.
///
/// Copies are verbatim. Failures are collected and the remaining files are
/// still copied.
pub fn create_missing(session: &mut ReconciliationSession) -> BulkReport {
    log_op_start!("create_missing");
    let start = std::time::Instant::now();

    let mut report = BulkReport::default();
    for name in session.missing_in_mock().to_vec() {
        let result = copy_fixture(&session.real_path(&name), &session.mock_path(&name));
        report.record(&name, result);
    }
    if report.failed.is_empty() {
        session.clear_missing();
    }

    log_op_end!(
        "create_missing",
        duration_ms = start.elapsed().as_millis() as u64,
        written = report.written.len(),
        failed = report.failed.len()
    );
    report
}
