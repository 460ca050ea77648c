//! Fixture diff pipeline.
//!
//! Compares a mock fixture document with its real counterpart and produces
//! one reviewable record per endpoint position.
//!
//! ## Entry point
//!
//! ```ignore
//! use mockdrift_core::diff::{compare, ExceptionFilter};
//!
//! let records = compare(&mock, &real, &ExceptionFilter::default());
//! let rows = mockdrift_core::diff::detail_rows(&records[0]);
//! ```
//!
//! ## Guarantees
//!
//! - **Alignment**: record `i` always describes `apis[i]` of both documents,
//!   and there is one record per position of the longer `apis` array.
//! - **Determinism**: identical inputs produce identical records in the same order.
//! - **Volatile fields**: changes touching an ignored field name never reach a record.

pub mod body;
pub mod filter;
pub mod group;
pub mod model;
pub mod normalize;
pub mod path;
pub mod structural;

pub use body::{detail_rows, expand_entry};
pub use filter::{ExceptionFilter, DEFAULT_IGNORED_FIELDS};
pub use group::{compare, filtered_changes, group_by_endpoint};
pub use model::{DiffAction, DisplayRow, EndpointDiffRecord, NormalizedDiffEntry, RawChangeNode};
pub use path::canonicalize;
pub use structural::diff;
