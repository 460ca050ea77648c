//! Core types shared across mockdrift facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error handling and logging facilities, so every crate in the workspace
//! emits the same structured field keys and event names.

pub mod schema;
