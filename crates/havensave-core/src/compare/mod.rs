//! Structural comparison of save documents across game versions.
//!
//! Each tree is first reduced to a [`SaveProfile`](crate::profile::SaveProfile)
//! (version, depth-bounded [`StructuralSummary`], entity/facility inventories)
//! and the two profiles are then diffed into a [`VersionComparison`].

pub mod batch;
pub mod comparator;
pub mod model;
pub mod report;
pub mod summary;
pub mod version;

pub use batch::{compare_all, find_save_files, AnalysisCache, BatchComparison};
pub use comparator::{compare, compare_profiles, DEFAULT_MAX_DEPTH};
pub use model::{IdRemap, VersionComparison};
pub use report::{generate_comparison_report, write_comparison_report};
pub use summary::StructuralSummary;
pub use version::{detect_version, DetectedVersion, VersionSource};
