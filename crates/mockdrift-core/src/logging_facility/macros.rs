//! Operation logging macros
//!
//! Every engine command and the endpoint controller bracket their work with
//! one start event and exactly one of end / end_error. Extra fields such as
//! `file`, `endpoint_index` or counts ride along after the fixed ones.

/// Start of an operation, optionally with fixture fields
///
/// ```
/// # use mockdrift_core::log_op_start;
/// log_op_start!("scan_fixtures");
/// log_op_start!("reconcile_endpoints", file = "users.json", record_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($($field)*)?
        );
    };
}

/// Successful end of an operation; `duration_ms` is mandatory
///
/// ```
/// # use mockdrift_core::log_op_end;
/// log_op_end!("apply_all", duration_ms = 12, change_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        );
    };
}

/// Failed end of an operation
///
/// Anything convertible into [`ExError`](crate::errors::ExError) is accepted.
/// The event carries its kind and code, plus `err.path` when the error names
/// a fixture or directory.
///
/// ```
/// # use mockdrift_core::{log_op_error, errors::DriftError};
/// let err = DriftError::MalformedDocument {
///     path: "mock/users.json".to_string(),
///     reason: "EOF while parsing".to_string(),
/// };
/// log_op_error!("scan_fixtures", err, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            err.path = ex_err.path(),
            $($($field)*)?
        );
    }};
}
