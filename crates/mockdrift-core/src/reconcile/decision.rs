//! Operator decisions.
//!
//! The controller never touches a terminal. It asks a [`DecisionProvider`]
//! for raw answers and shows things through a [`Presenter`], so the whole
//! dialogue can be scripted in tests.

use crate::diff::model::{DisplayRow, EndpointDiffRecord};
use crate::errors::Result;

/// Source of operator answers, one line at a time.
pub trait DecisionProvider {
    /// Show `prompt` and block until one line of input is available.
    ///
    /// # Errors
    ///
    /// `PromptClosed` when input has ended, `PromptFailed` on read errors.
    fn read_answer(&mut self, prompt: &str) -> Result<String>;
}

/// Display surface for one endpoint review.
pub trait Presenter {
    /// Endpoint identity plus request/response path summaries
    fn preview(&mut self, record: &EndpointDiffRecord);

    /// Detailed ACTION / PATH / MOCK / REAL rows
    fn detail(&mut self, rows: &[DisplayRow]);
}

/// The questions the reconciler asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    DetailReview,
    ApplyChange,
    CreateMissing,
    FilesMenu,
}

impl Question {
    /// Text shown before the first answer
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::DetailReview => {
                "Do you want to see differences more detailed? [Y/N]\nType (Q) for exit"
            }
            Question::ApplyChange => {
                "For any action please choose the option:\nY - Override mock data, N - Skip, no modifications"
            }
            Question::CreateMissing => "Create missing data?:\n    Y - Yes\n    N - No",
            Question::FilesMenu => {
                "Please choose from the options:\n    S - show differences\n    A - apply all differences\n    Q - quit"
            }
        }
    }

    /// Text shown after an answer outside the accepted set
    pub fn retry(&self) -> &'static str {
        match self {
            Question::DetailReview => "Please choose from Y/N/Q: ",
            Question::ApplyChange | Question::CreateMissing => "Please choose from Y/N: ",
            Question::FilesMenu => "Please choose from S/A/Q: ",
        }
    }
}

/// An answer set for a [`Question`].
pub trait Choice: Sized {
    /// Accepted answer, compared case-insensitively after trimming
    fn parse(answer: &str) -> Option<Self>;
}

/// Ask `question` until the provider returns an accepted answer.
///
/// Invalid answers are logged and re-prompted without limit.
///
/// # Errors
///
/// Whatever the provider reports; input ending is never turned into a default.
pub fn ask<T: Choice>(provider: &mut dyn DecisionProvider, question: Question) -> Result<T> {
    let mut prompt = question.prompt();
    loop {
        let answer = provider.read_answer(prompt)?;
        if let Some(choice) = T::parse(&answer) {
            return Ok(choice);
        }
        tracing::debug!(?question, answer = %answer.trim(), "answer rejected");
        prompt = question.retry();
    }
}

fn normalized(answer: &str) -> String {
    answer.trim().to_ascii_lowercase()
}

/// Shared vocabulary of every Y/N question
fn yes_no(answer: &str) -> Option<bool> {
    match normalized(answer).as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Answer to [`Question::DetailReview`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailChoice {
    ShowDetail,
    SkipDetail,
    Quit,
}

impl Choice for DetailChoice {
    fn parse(answer: &str) -> Option<Self> {
        match yes_no(answer) {
            Some(true) => Some(DetailChoice::ShowDetail),
            Some(false) => Some(DetailChoice::SkipDetail),
            None if normalized(answer) == "q" => Some(DetailChoice::Quit),
            None => None,
        }
    }
}

/// Answer to [`Question::ApplyChange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyChoice {
    Accept,
    Reject,
}

impl Choice for ApplyChoice {
    fn parse(answer: &str) -> Option<Self> {
        yes_no(answer).map(|accept| {
            if accept {
                ApplyChoice::Accept
            } else {
                ApplyChoice::Reject
            }
        })
    }
}

/// Answer to [`Question::CreateMissing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Yes,
    No,
}

impl Choice for ConfirmChoice {
    fn parse(answer: &str) -> Option<Self> {
        yes_no(answer).map(|yes| if yes { ConfirmChoice::Yes } else { ConfirmChoice::No })
    }
}

/// Answer to [`Question::FilesMenu`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowDifferences,
    ApplyAll,
    Quit,
}

impl Choice for MenuChoice {
    fn parse(answer: &str) -> Option<Self> {
        match normalized(answer).as_str() {
            "s" => Some(MenuChoice::ShowDifferences),
            "a" => Some(MenuChoice::ApplyAll),
            "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}
