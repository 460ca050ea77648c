//! Plain-text rendering of review tables.
//!
//! Colouring is left to the terminal front end; everything here is
//! deterministic text so it can be asserted on in tests.

pub mod table;

pub use table::{detail_table, paths_table, DETAIL_WIDTH, PATHS_WIDTH};
