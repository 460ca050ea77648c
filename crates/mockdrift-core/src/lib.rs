//! mockdrift core: fixture drift detection and reconciliation
//!
//! This crate holds everything that does not touch the file system or the
//! terminal:
//! - Fixture document model (`apis` list plus untouched top-level fields)
//! - Structural diff, path canonicalization and volatile-field filtering
//! - Endpoint grouping and body expansion for review
//! - The per-endpoint review state machine, driven by injected decisions
//! - Settings, error taxonomy and the logging facility

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod reconcile;
pub mod render;

pub use mockdrift_core_types::schema;

// Re-export commonly used types
pub use config::DriftConfig;
pub use diff::{compare, EndpointDiffRecord, ExceptionFilter};
pub use errors::{DriftError, ExError, ExErrorKind, Result};
pub use model::Dataset;
pub use reconcile::{Controller, DecisionProvider, Presenter, ReconcileOutcome};
