//! Interactive reconciliation of one mock/real document pair.

pub mod controller;
pub mod decision;
pub mod working;

pub use controller::{Controller, ReconcileOutcome, State};
pub use decision::{
    ask, ApplyChoice, Choice, ConfirmChoice, DecisionProvider, DetailChoice, MenuChoice,
    Presenter, Question,
};
pub use working::WorkingSet;
