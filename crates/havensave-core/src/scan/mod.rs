//! Unknown-identifier scanning.
//!
//! A scan runs two passes over one tree:
//!
//! 1. **Targeted**: the rules in [`rules::TARGET_RULES`] locate identifiers by
//!    structural context (character blocks, storage, research, crafts) and
//!    classify each against its own catalog category.
//! 2. **Catch-all**: every node whose tag no targeted rule covers is checked
//!    for the generic identifier attributes; values are classified against the
//!    catalog union and misses are recorded as `generic`.
//!
//! Non-numeric identifier values are skipped in both passes.

pub mod model;
pub mod report;
pub mod rules;
pub mod scanner;

pub use model::{ScanCategory, ScanResult, UnknownItem};
pub use report::{generate_report, render_summary, write_report};
pub use scanner::{scan, scan_file, IdScanner};
