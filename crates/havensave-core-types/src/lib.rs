//! Core types shared across havensave facilities
//!
//! This crate provides the canonical field keys and event names used by the
//! structured logging facility and by error reporting in every other crate.

pub mod schema;
