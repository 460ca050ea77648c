//! Session commands
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for file-level operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal
//! details, apart from the review loop which logs its own lifecycle.

pub mod bulk;
pub mod interactive;
pub mod run;
