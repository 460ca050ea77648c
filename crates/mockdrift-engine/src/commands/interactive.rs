//! Interactive pass over every file pair.

use crate::session::{ReconciliationSession, SessionView};
use mockdrift_core::diff::{filtered_changes, group_by_endpoint};
use mockdrift_core::errors::Result;
use mockdrift_core::reconcile::{Controller, DecisionProvider};
use mockdrift_core::{log_op_end, log_op_error, log_op_start};
use mockdrift_store::write_dataset;

/// Review every file pair with differences, endpoint by endpoint.
///
/// Pairs are visited in real-listing order. Quitting ends the review of the
/// current file only. A file is written back only if at least one endpoint
/// in it was accepted; a failed write is reported and the run moves on.
///
/// # Errors
///
/// Fails on unreadable or malformed documents and when operator input fails.
pub fn reconcile_interactive<V: SessionView>(
    session: &mut ReconciliationSession,
    decisions: &mut dyn DecisionProvider,
    view: &mut V,
) -> Result<()> {
    log_op_start!("reconcile_interactive");
    let start = std::time::Instant::now();

    reconcile_interactive_impl(session, decisions, view).map_err(|e| {
        log_op_error!(
            "reconcile_interactive",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "reconcile_interactive",
        duration_ms = start.elapsed().as_millis() as u64,
        updated = session.updated_files().len()
    );
    Ok(())
}

fn reconcile_interactive_impl<V: SessionView>(
    session: &mut ReconciliationSession,
    decisions: &mut dyn DecisionProvider,
    view: &mut V,
) -> Result<()> {
    view.ignored_fields(session.config().filter.fields());

    for name in session.pairs() {
        let (mock, real) = session.load_pair(&name)?;
        let changes = filtered_changes(&mock, &real, &session.config().filter);
        if changes.is_empty() {
            view.file_skipped(&name);
            continue;
        }

        view.file_header(&name);
        let records = group_by_endpoint(&mock, &real, &changes);
        let outcome = Controller::new(decisions, view).reconcile(&records, mock, &real)?;
        if let Some(index) = outcome.aborted_at {
            tracing::info!(file = %name, endpoint_index = index, "review of file stopped by operator");
        }
        if !outcome.modified() {
            continue;
        }

        let path = session.mock_path(&name);
        match write_dataset(&path, &outcome.mock, session.config().indent) {
            Ok(()) => {
                tracing::info!(file = %name, change_count = outcome.accepted.len(), "mock fixture updated");
                session.mark_updated(&name);
            }
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "mock fixture not written");
                view.write_failed(&name, &e);
            }
        }
    }

    view.updated_files(session.updated_files());
    Ok(())
}
