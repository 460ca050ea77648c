//! One complete run: scan, then either the dialogue or the bulk flags.

use crate::commands::bulk::{apply_all, create_missing, BulkReport};
use crate::commands::interactive::reconcile_interactive;
use crate::session::{ReconciliationSession, SessionConfig, SessionView};
use mockdrift_core::errors::Result;
use mockdrift_core::reconcile::{ask, ConfirmChoice, DecisionProvider, MenuChoice, Question};

/// How a run resolves differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Ask the operator at every step
    Interactive,
    /// No prompts; do what the flags say
    Bulk { apply_all: bool, create_missing: bool },
}

/// What a run changed on disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionReport {
    pub missing_in_mock: Vec<String>,
    pub files_with_diffs: Vec<String>,
    /// Mock files written by the interactive review
    pub updated_files: Vec<String>,
    /// Mock files replaced by apply-all
    pub applied: BulkReport,
    /// Mock files created from real ones
    pub created: BulkReport,
}

/// Open both directories, scan them and resolve differences per `mode`.
///
/// Interactive runs first offer to create missing fixtures, then show the
/// files with differences and ask whether to review them (S), apply them
/// all (A) or quit (Q).
///
/// # Errors
///
/// Directory, document and operator input failures. Write failures do not
/// fail the run; they are listed in the report.
pub fn run<V: SessionView>(
    config: SessionConfig,
    mode: Mode,
    decisions: &mut dyn DecisionProvider,
    view: &mut V,
) -> Result<SessionReport> {
    let mut session = ReconciliationSession::open(config)?;
    session.scan()?;

    let mut report = SessionReport {
        missing_in_mock: session.missing_in_mock().to_vec(),
        files_with_diffs: session.files_with_diffs().to_vec(),
        ..SessionReport::default()
    };

    match mode {
        Mode::Bulk {
            apply_all: apply,
            create_missing: create,
        } => {
            if apply {
                report.applied = apply_all(&mut session)?;
            }
            if create {
                report.created = create_missing(&mut session);
            }
        }
        Mode::Interactive => interactive(&mut session, &mut report, decisions, view)?,
    }

    report.updated_files = session.updated_files().to_vec();
    Ok(report)
}

fn interactive<V: SessionView>(
    session: &mut ReconciliationSession,
    report: &mut SessionReport,
    decisions: &mut dyn DecisionProvider,
    view: &mut V,
) -> Result<()> {
    view.missing_files(session.missing_in_mock());
    if !session.missing_in_mock().is_empty()
        && ask::<ConfirmChoice>(decisions, Question::CreateMissing)? == ConfirmChoice::Yes
    {
        report.created = create_missing(session);
    }

    view.files_with_differences(session.files_with_diffs());
    if session.files_with_diffs().is_empty() {
        return Ok(());
    }

    match ask::<MenuChoice>(decisions, Question::FilesMenu)? {
        MenuChoice::ShowDifferences => reconcile_interactive(session, decisions, view)?,
        MenuChoice::ApplyAll => report.applied = apply_all(session)?,
        MenuChoice::Quit => tracing::info!("operator quit before reviewing differences"),
    }
    Ok(())
}
