//! Save introspection for Space Haven: attributed trees, the reference
//! catalog, unknown-identifier scanning and cross-version comparison.

pub mod catalog;
pub mod compare;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod profile;
pub mod scan;
pub mod tree;

pub use havensave_core_types::schema;

pub use catalog::{IdCategory, ReferenceCatalog};
pub use compare::{compare, VersionComparison};
pub use config::Settings;
pub use errors::{ExError, ExErrorKind, HavenError, Result};
pub use profile::SaveProfile;
pub use scan::{generate_report, scan, ScanResult};
pub use tree::{AttributedTree, Node};
