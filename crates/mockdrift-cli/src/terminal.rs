//! Terminal front end: line prompts on stdin, coloured output on stdout.

use colored::Colorize;
use mockdrift_core::diff::{DiffAction, DisplayRow};
use mockdrift_core::errors::{DriftError, Result};
use mockdrift_core::reconcile::{DecisionProvider, Presenter};
use mockdrift_core::render::{detail_table, paths_table};
use mockdrift_core::EndpointDiffRecord;
use mockdrift_engine::{SessionReport, SessionView};
use std::fmt::Display;
use std::io::{BufRead, Write};

const WARNING_TEXT: &str = "PLEASE NOTE, THAT THE TOOL SKIPS VALIDATION FOR THE FOLLOWING KEY/VALUE CHANGES IN STORED API RESULTS: ";
const SUGGESTION_TEXT: &str = "SUGGESTION: Please rerun your existing test cases affected by these changes to check the updates correctness with MOCK data usage.";

/// Reads one answer per line from `input`, echoing prompts to `output`.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> DecisionProvider for TerminalPrompt<R, W> {
    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        let failed = |e: std::io::Error| DriftError::PromptFailed {
            reason: e.to_string(),
        };

        if prompt.ends_with(": ") {
            write!(self.output, "{}", prompt).map_err(failed)?;
        } else {
            writeln!(self.output, "\n{}", prompt.magenta()).map_err(failed)?;
        }
        self.output.flush().map_err(failed)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(failed)? == 0 {
            return Err(DriftError::PromptClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Coloured session output.
pub struct TerminalView<W> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::debug!(error = %e, "terminal output lost");
        }
    }

    fn file_list(&mut self, names: &[String]) {
        for name in names {
            self.emit(name.bright_blue().bold());
        }
    }

    /// Files touched by apply-all and create-missing
    pub fn bulk_summary(&mut self, report: &SessionReport) {
        for (title, bulk) in [
            ("Mock data replaced with real data:", &report.applied),
            ("Missing mock data created:", &report.created),
        ] {
            if !bulk.written.is_empty() {
                self.emit(format!("\n{}", title).yellow());
                self.file_list(&bulk.written);
            }
            for (name, error) in &bulk.failed {
                self.emit(format!("Failed to write {}: {}", name, error).red());
            }
        }
    }
}

impl<W: Write> Presenter for TerminalView<W> {
    fn preview(&mut self, record: &EndpointDiffRecord) {
        self.emit(
            format!(
                "\nURL:    {}\nMETHOD: {}\n",
                record.api.url, record.api.method
            )
            .green(),
        );
        if let Some(table) = paths_table("REQUEST", &record.request_paths) {
            self.emit(table);
        }
        if let Some(table) = paths_table("RESPONSE", &record.response_paths) {
            self.emit(table);
        }
        match record.whole_endpoint_change() {
            Some(DiffAction::Deleted) => self.emit("\nThe request is deleted.".bright_white()),
            Some(DiffAction::Added) => self.emit("\nThe request is new.".bright_white()),
            _ => {}
        }
    }

    fn detail(&mut self, rows: &[DisplayRow]) {
        if let Some(table) = detail_table(rows) {
            self.emit(table);
        }
    }
}

impl<W: Write> SessionView for TerminalView<W> {
    fn ignored_fields(&mut self, fields: &[String]) {
        self.emit(format!(
            "\n{}{}{}",
            "WARNING: ".yellow().bold(),
            WARNING_TEXT.yellow(),
            fields.join(",").red()
        ));
    }

    fn missing_files(&mut self, names: &[String]) {
        if names.is_empty() {
            self.emit("\nThere is no missing mock data.".yellow());
            return;
        }
        self.emit("\nThe following data is missing from mock files:".yellow());
        self.file_list(names);
    }

    fn files_with_differences(&mut self, names: &[String]) {
        if names.is_empty() {
            self.emit("\nThere are no differences for mock data.\n".yellow());
            return;
        }
        self.emit("\nThe following mock data have differences with real data:".yellow());
        self.file_list(names);
    }

    fn file_header(&mut self, name: &str) {
        self.emit(format!(
            "\n{}{}{}",
            "Differences for ".bright_white(),
            name.bright_blue().bold(),
            " MOCK DATA and real API requests".bright_white()
        ));
    }

    fn file_skipped(&mut self, name: &str) {
        self.emit(format!(
            "\n{}{}{}\n",
            "Skipping ".black().on_white(),
            name.bright_blue().bold().on_white(),
            "  MOCK DATA changes, as the mock/real API requests are the same"
                .black()
                .on_white()
        ));
    }

    fn write_failed(&mut self, name: &str, error: &DriftError) {
        self.emit(format!("Failed to write {}: {}", name, error).red());
    }

    fn updated_files(&mut self, names: &[String]) {
        if names.is_empty() {
            self.emit("\nNo mock data has been updated.".yellow());
        } else {
            self.emit("\nChanges are applied for the following files:".yellow());
            self.file_list(names);
        }
        self.emit(format!("\n{}\n", SUGGESTION_TEXT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockdrift_core::diff::model::{ApiIdentity, NormalizedDiffEntry};
    use serde_json::json;
    use std::io::Cursor;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_prompt_reads_one_line_per_answer() {
        let mut prompt = TerminalPrompt::new(Cursor::new("y\r\nq\n"), Vec::new());
        assert_eq!(prompt.read_answer("first").unwrap(), "y");
        assert_eq!(prompt.read_answer("Please choose from Y/N: ").unwrap(), "q");
    }

    #[test]
    fn test_prompt_end_of_input_is_closed() {
        let mut prompt = TerminalPrompt::new(Cursor::new(""), Vec::new());
        assert_eq!(prompt.read_answer("x").unwrap_err(), DriftError::PromptClosed);
    }

    #[test]
    fn test_retry_prompt_stays_on_line() {
        plain();
        let mut out = Vec::new();
        TerminalPrompt::new(Cursor::new("n\n"), &mut out)
            .read_answer("Please choose from Y/N: ")
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Please choose from Y/N: ");
    }

    #[test]
    fn test_preview_shows_identity_and_notice() {
        plain();
        let mut record = EndpointDiffRecord::new(
            2,
            ApiIdentity {
                url: "/v2/items".to_string(),
                method: "GET".to_string(),
            },
        );
        record.diffs.push(NormalizedDiffEntry {
            action: DiffAction::Added,
            path: "apis".to_string(),
            mock_value: None,
            real_value: Some(json!({})),
        });

        let mut out = Vec::new();
        TerminalView::new(&mut out).preview(&record);
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("URL:    /v2/items"));
        assert!(text.contains("METHOD: GET"));
        assert!(text.contains("The request is new."));
        assert!(!text.contains("REQUEST"));
    }

    #[test]
    fn test_updated_files_report() {
        plain();
        let mut out = Vec::new();
        TerminalView::new(&mut out).updated_files(&[]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No mock data has been updated."));
        assert!(text.contains("SUGGESTION"));
    }
}
