use serde::{Deserialize, Serialize};

/// One identifier whose name differs between the two saves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdRemap {
    pub id: String,
    /// Name in the compared (older) save
    pub old_name: String,
    /// Name in the baseline (newer) save
    pub new_name: String,
}

/// Result of comparing a save against a baseline.
///
/// Built once per comparison and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionComparison {
    pub baseline_source: String,
    pub comparison_source: String,
    pub baseline_version: String,
    pub comparison_version: String,
    /// Present in the baseline, absent from the compared save
    pub missing_elements: Vec<String>,
    /// Present in the compared save, absent from the baseline
    pub new_elements: Vec<String>,
    pub id_remaps: Vec<IdRemap>,
    pub structural_diffs: Vec<String>,
    pub notes: Vec<String>,
}

impl VersionComparison {
    pub fn has_differences(&self) -> bool {
        !self.missing_elements.is_empty()
            || !self.new_elements.is_empty()
            || !self.id_remaps.is_empty()
            || !self.structural_diffs.is_empty()
    }

    /// Whether migrating the compared save calls for caution
    pub fn needs_caution(&self) -> bool {
        !self.missing_elements.is_empty() || !self.structural_diffs.is_empty()
    }
}
