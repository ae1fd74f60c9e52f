//! Baseline-versus-other comparison.

use crate::compare::model::{IdRemap, VersionComparison};
use crate::compare::summary::StructuralSummary;
use crate::errors::{HavenError, Result};
use crate::profile::SaveProfile;
use crate::tree::AttributedTree;
use crate::{log_op_end, log_op_error, log_op_start};
use std::collections::BTreeSet;
use std::time::Instant;

/// Summary depth used when the caller has no preference
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Compare `other` against `baseline`.
///
/// The baseline is the reference (usually the newer save); "missing" means
/// present in the baseline but not in `other`.
///
/// # Errors
///
/// Returns `HavenError::ParseUnavailable` if either tree is absent.
pub fn compare(
    baseline: Option<&AttributedTree>,
    other: Option<&AttributedTree>,
    max_depth: usize,
) -> Result<VersionComparison> {
    let start = Instant::now();
    log_op_start!("compare", max_depth = max_depth as u64);

    let (baseline, other) = match (baseline, other) {
        (Some(b), Some(o)) => (b, o),
        (b, _) => {
            let side = if b.is_none() { "baseline" } else { "comparison" };
            let err = HavenError::ParseUnavailable {
                side: side.to_string(),
            };
            log_op_error!(
                "compare",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(err);
        }
    };

    let result = compare_profiles(
        &SaveProfile::analyze(baseline, max_depth),
        &SaveProfile::analyze(other, max_depth),
    );

    log_op_end!(
        "compare",
        duration_ms = start.elapsed().as_millis() as u64,
        missing = result.missing_elements.len() as u64,
        new = result.new_elements.len() as u64,
        remaps = result.id_remaps.len() as u64,
        structural = result.structural_diffs.len() as u64
    );
    Ok(result)
}

/// Diff two already-analyzed profiles
pub fn compare_profiles(baseline: &SaveProfile, other: &SaveProfile) -> VersionComparison {
    let mut missing = Vec::new();
    let mut new = Vec::new();

    set_delta(
        "Root attribute",
        baseline.root_attributes.keys(),
        other.root_attributes.keys(),
        &mut missing,
        &mut new,
    );
    set_delta(
        "Entity type",
        baseline.entity_types.iter(),
        other.entity_types.iter(),
        &mut missing,
        &mut new,
    );
    set_delta(
        "Facility type",
        baseline.facility_types.iter(),
        other.facility_types.iter(),
        &mut missing,
        &mut new,
    );

    let mut structural = Vec::new();
    walk(
        &baseline.structure,
        &other.structure,
        "root",
        true,
        &mut missing,
        &mut new,
        &mut structural,
    );

    let id_remaps: Vec<IdRemap> = baseline
        .item_names
        .iter()
        .filter_map(|(id, new_name)| {
            let old_name = other.item_names.get(id)?;
            (old_name != new_name).then(|| IdRemap {
                id: id.clone(),
                old_name: old_name.clone(),
                new_name: new_name.clone(),
            })
        })
        .collect();

    let mut comparison = VersionComparison {
        baseline_source: baseline.source_id.clone(),
        comparison_source: other.source_id.clone(),
        baseline_version: baseline.version.clone(),
        comparison_version: other.version.clone(),
        missing_elements: missing,
        new_elements: new,
        id_remaps,
        structural_diffs: structural,
        notes: Vec::new(),
    };
    comparison.notes = compatibility_notes(&comparison);
    comparison
}

fn set_delta<'a>(
    label: &str,
    baseline: impl Iterator<Item = &'a String>,
    other: impl Iterator<Item = &'a String>,
    missing: &mut Vec<String>,
    new: &mut Vec<String>,
) {
    let b: BTreeSet<&String> = baseline.collect();
    let o: BTreeSet<&String> = other.collect();
    missing.extend(b.difference(&o).map(|v| format!("{}: {}", label, v)));
    new.extend(o.difference(&b).map(|v| format!("{}: {}", label, v)));
}

/// Compare immediate child tags at every node path both summaries share.
fn walk(
    baseline: &StructuralSummary,
    other: &StructuralSummary,
    path: &str,
    is_root: bool,
    missing: &mut Vec<String>,
    new: &mut Vec<String>,
    structural: &mut Vec<String>,
) {
    if baseline.truncated || other.truncated {
        return;
    }

    // root attributes are reported as "Root attribute" entries
    if !is_root {
        for key in baseline.attribute_keys.difference(&other.attribute_keys) {
            structural.push(format!("Attribute missing at {}: {}", path, key));
        }
        for key in other.attribute_keys.difference(&baseline.attribute_keys) {
            structural.push(format!("Attribute added at {}: {}", path, key));
        }
    }

    let b_tags = baseline.child_tags();
    let o_tags = other.child_tags();
    for tag in b_tags.difference(&o_tags) {
        missing.push(format!("Element at {}: <{}>", path, tag));
    }
    for tag in o_tags.difference(&b_tags) {
        new.push(format!("Element at {}: <{}>", path, tag));
    }

    for tag in b_tags.intersection(&o_tags) {
        if let (Some(b), Some(o)) = (baseline.child(tag), other.child(tag)) {
            let child_path = format!("{}/{}", path, tag);
            walk(b, o, &child_path, false, missing, new, structural);
        }
    }
}

fn compatibility_notes(comparison: &VersionComparison) -> Vec<String> {
    let mut notes = Vec::new();
    if !comparison.missing_elements.is_empty() {
        notes.push(format!(
            "The older save is missing {} elements present in the newer version.",
            comparison.missing_elements.len()
        ));
    }
    if !comparison.new_elements.is_empty() {
        notes.push(format!(
            "The older save has {} elements not present in the newer version.",
            comparison.new_elements.len()
        ));
    }
    if !comparison.id_remaps.is_empty() {
        notes.push(format!(
            "Found {} item/facility ID changes between versions.",
            comparison.id_remaps.len()
        ));
    }
    if !comparison.structural_diffs.is_empty() {
        notes.push(format!(
            "Detected {} structural differences in the save format.",
            comparison.structural_diffs.len()
        ));
    }
    if notes.is_empty() {
        notes.push("Save files appear to be structurally compatible.".to_string());
    }
    notes
}
