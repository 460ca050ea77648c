//! Per-endpoint review loop.
//!
//! ```text
//! Seek ──record with changes──▶ Preview ──▶ Detail ──show/skip──▶ Apply ──▶ Seek
//!   │                                         │
//!   └──no records left──▶ Done                └──quit──▶ Aborted
//! ```
//!
//! Accepting copies `real.apis[i]` over `mock.apis[i]`. When the real side
//! has no endpoint at `i` the slot becomes a hole, and holes are pruned once
//! the loop stops, whether it finished or was aborted.

use crate::diff::body::detail_rows;
use crate::diff::model::EndpointDiffRecord;
use crate::errors::Result;
use crate::model::Dataset;
use crate::reconcile::decision::{
    ask, ApplyChoice, DecisionProvider, DetailChoice, Presenter, Question,
};
use crate::reconcile::working::WorkingSet;
use crate::{log_op_end, log_op_error, log_op_start};

/// Position of the review loop.
///
/// The `usize` payloads index the record slice passed to
/// [`Controller::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Seek(usize),
    Preview(usize),
    Detail(usize),
    Apply(usize),
    Done,
    Aborted(usize),
}

/// Result of reviewing one document pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileOutcome {
    /// Mock document after the accepted changes, holes pruned
    pub mock: Dataset,
    /// Endpoint indices whose real version was accepted, in review order
    pub accepted: Vec<usize>,
    /// Endpoint index at which the operator quit
    pub aborted_at: Option<usize>,
}

impl ReconcileOutcome {
    /// True if at least one change was accepted, so the document must be written
    pub fn modified(&self) -> bool {
        !self.accepted.is_empty()
    }
}

pub struct Controller<'a> {
    decisions: &'a mut dyn DecisionProvider,
    presenter: &'a mut dyn Presenter,
}

impl<'a> Controller<'a> {
    pub fn new(decisions: &'a mut dyn DecisionProvider, presenter: &'a mut dyn Presenter) -> Self {
        Self {
            decisions,
            presenter,
        }
    }

    /// Review `records` against `real`, mutating `mock` as changes are accepted.
    ///
    /// # Errors
    ///
    /// Fails only when the decision provider fails; nothing is returned
    /// from a partially reviewed document in that case.
    pub fn reconcile(
        &mut self,
        records: &[EndpointDiffRecord],
        mock: Dataset,
        real: &Dataset,
    ) -> Result<ReconcileOutcome> {
        log_op_start!("reconcile_endpoints", record_count = records.len());
        let start = std::time::Instant::now();

        let outcome = self.run(records, mock, real).map_err(|e| {
            log_op_error!(
                "reconcile_endpoints",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "reconcile_endpoints",
            duration_ms = start.elapsed().as_millis() as u64,
            change_count = outcome.accepted.len()
        );
        Ok(outcome)
    }

    fn run(
        &mut self,
        records: &[EndpointDiffRecord],
        mut mock: Dataset,
        real: &Dataset,
    ) -> Result<ReconcileOutcome> {
        let mut working = WorkingSet::new(mock.apis());
        let mut accepted = Vec::new();
        let mut state = State::Seek(0);

        loop {
            state = match state {
                State::Seek(from) => records
                    .iter()
                    .enumerate()
                    .skip(from)
                    .find(|(_, record)| record.has_changes())
                    .map_or(State::Done, |(position, _)| State::Preview(position)),
                State::Preview(position) => {
                    self.presenter.preview(&records[position]);
                    State::Detail(position)
                }
                State::Detail(position) => {
                    match ask::<DetailChoice>(self.decisions, Question::DetailReview)? {
                        DetailChoice::ShowDetail => {
                            self.presenter.detail(&detail_rows(&records[position]));
                            State::Apply(position)
                        }
                        DetailChoice::SkipDetail => State::Apply(position),
                        DetailChoice::Quit => State::Aborted(position),
                    }
                }
                State::Apply(position) => {
                    let index = records[position].index;
                    match ask::<ApplyChoice>(self.decisions, Question::ApplyChange)? {
                        ApplyChoice::Accept => {
                            working.accept(index, real.api(index));
                            accepted.push(index);
                            tracing::debug!(endpoint_index = index, "real endpoint accepted");
                        }
                        ApplyChoice::Reject => {
                            tracing::debug!(endpoint_index = index, "mock endpoint kept");
                        }
                    }
                    State::Seek(position + 1)
                }
                State::Done | State::Aborted(_) => break,
            };
        }

        let aborted_at = match state {
            State::Aborted(position) => Some(records[position].index),
            _ => None,
        };
        if working.holes() > 0 {
            tracing::debug!(holes = working.holes(), "pruning deleted endpoints");
        }
        mock.set_apis(working.into_pruned());

        Ok(ReconcileOutcome {
            mock,
            accepted,
            aborted_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::filter::ExceptionFilter;
    use crate::diff::group::compare;
    use crate::diff::model::DisplayRow;
    use crate::errors::DriftError;
    use crate::reconcile::decision::scripted::ScriptedDecisions;
    use serde_json::{json, Value};

    #[derive(Default)]
    struct RecordingPresenter {
        previews: Vec<usize>,
        details: Vec<Vec<DisplayRow>>,
    }

    impl Presenter for RecordingPresenter {
        fn preview(&mut self, record: &EndpointDiffRecord) {
            self.previews.push(record.index);
        }

        fn detail(&mut self, rows: &[DisplayRow]) {
            self.details.push(rows.to_vec());
        }
    }

    fn api(url: &str, status: u16) -> Value {
        json!({"request": {"url": url, "method": "GET"}, "response": {"status": status}})
    }

    fn run(
        mock: Vec<Value>,
        real: Vec<Value>,
        answers: &[&str],
    ) -> (Result<ReconcileOutcome>, RecordingPresenter, ScriptedDecisions) {
        let mock = Dataset::from_apis(mock);
        let real = Dataset::from_apis(real);
        let records = compare(&mock, &real, &ExceptionFilter::default());
        let mut decisions = ScriptedDecisions::new(answers);
        let mut presenter = RecordingPresenter::default();
        let outcome = Controller::new(&mut decisions, &mut presenter).reconcile(&records, mock, &real);
        (outcome, presenter, decisions)
    }

    // ----------------------------------------------------------------
    // Accept / reject
    // ----------------------------------------------------------------

    #[test]
    fn test_accept_copies_real_endpoint() {
        let (outcome, presenter, _) = run(
            vec![api("/a", 200), api("/b", 200)],
            vec![api("/a", 200), api("/b", 500)],
            &["n", "y"],
        );
        let outcome = outcome.unwrap();

        assert_eq!(presenter.previews, vec![1]);
        assert_eq!(outcome.accepted, vec![1]);
        assert!(outcome.modified());
        assert_eq!(outcome.mock.apis(), &[api("/a", 200), api("/b", 500)]);
    }

    #[test]
    fn test_reject_leaves_mock_untouched() {
        let (outcome, _, _) = run(vec![api("/a", 200)], vec![api("/a", 404)], &["y", "n"]);
        let outcome = outcome.unwrap();

        assert!(!outcome.modified());
        assert_eq!(outcome.mock.apis(), &[api("/a", 200)]);
    }

    #[test]
    fn test_new_endpoint_is_appended() {
        // Scenario: real gained /v2/items at index 2
        let (outcome, presenter, _) = run(
            vec![api("/a", 200), api("/b", 200)],
            vec![api("/a", 200), api("/b", 200), api("/v2/items", 200)],
            &["y", "y"],
        );
        let outcome = outcome.unwrap();

        assert_eq!(presenter.details[0][0].path, "apis");
        assert_eq!(outcome.mock.apis().len(), 3);
        assert_eq!(outcome.mock.api(2), Some(&api("/v2/items", 200)));
    }

    #[test]
    fn test_accepted_deletion_is_pruned() {
        let (outcome, _, _) = run(
            vec![api("/a", 200), api("/b", 200), api("/c", 200)],
            vec![api("/a", 200), api("/b", 200)],
            &["n", "y"],
        );
        let outcome = outcome.unwrap();

        assert_eq!(outcome.accepted, vec![2]);
        assert_eq!(outcome.mock.apis(), &[api("/a", 200), api("/b", 200)]);
    }

    // ----------------------------------------------------------------
    // Quit and input handling
    // ----------------------------------------------------------------

    #[test]
    fn test_quit_stops_before_later_endpoints() {
        // Scenario: three changed endpoints, accept first, quit on second
        // Then: third is never previewed and keeps its mock value
        let (outcome, presenter, decisions) = run(
            vec![api("/a", 200), api("/b", 200), api("/c", 200)],
            vec![api("/a", 201), api("/b", 201), api("/c", 201)],
            &["n", "y", "q", "y", "y"],
        );
        let outcome = outcome.unwrap();

        assert_eq!(presenter.previews, vec![0, 1]);
        assert_eq!(outcome.aborted_at, Some(1));
        assert_eq!(outcome.accepted, vec![0]);
        assert_eq!(outcome.mock.api(1), Some(&api("/b", 200)));
        assert_eq!(outcome.mock.api(2), Some(&api("/c", 200)));
        assert_eq!(decisions.remaining(), 2);
    }

    #[test]
    fn test_quit_still_prunes_accepted_deletions() {
        let (outcome, _, _) = run(
            vec![api("/a", 200), api("/b", 200), api("/c", 200)],
            vec![api("/a", 500)],
            &["n", "n", "n", "y", "q"],
        );
        let outcome = outcome.unwrap();

        assert_eq!(outcome.aborted_at, Some(2));
        assert_eq!(outcome.accepted, vec![1]);
        assert_eq!(outcome.mock.apis(), &[api("/a", 200), api("/c", 200)]);
    }

    #[test]
    fn test_invalid_answers_reprompt() {
        let (outcome, _, decisions) = run(vec![api("/a", 200)], vec![api("/a", 500)], &["maybe", "n", "x", "y"]);

        assert!(outcome.unwrap().modified());
        assert_eq!(
            decisions.prompts[1],
            Question::DetailReview.retry(),
            "second prompt is the detail retry"
        );
        assert_eq!(decisions.prompts[3], Question::ApplyChange.retry());
    }

    #[test]
    fn test_closed_input_fails_the_review() {
        let (outcome, _, _) = run(vec![api("/a", 200)], vec![api("/a", 500)], &["y"]);
        assert!(matches!(outcome, Err(DriftError::PromptClosed)));
    }

    #[test]
    fn test_records_without_changes_are_skipped_silently() {
        let (outcome, presenter, decisions) = run(vec![api("/a", 200)], vec![api("/a", 200)], &[]);
        assert!(!outcome.unwrap().modified());
        assert!(presenter.previews.is_empty());
        assert!(decisions.prompts.is_empty());
    }
}
