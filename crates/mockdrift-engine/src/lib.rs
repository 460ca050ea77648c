//! mockdrift engine - orchestration layer
//!
//! Ties the core diff/review logic to fixture directories on disk. One
//! [`session::ReconciliationSession`] covers one run over a mock and a real
//! directory, in interactive or bulk mode.

pub mod commands;
pub mod session;

pub use commands::run::{run, Mode, SessionReport};
pub use session::{ReconciliationSession, SessionConfig, SessionView};
