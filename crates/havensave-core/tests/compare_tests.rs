#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{NEWER_SAVE, OLDER_SAVE};
use havensave_core::compare::{compare, compare_all, find_save_files, AnalysisCache, IdRemap};
use havensave_core::errors::{ExError, ExErrorKind, HavenError};
use havensave_core::tree::{parse_document, AttributedTree, Node};
use havensave_core::SaveProfile;

fn newer() -> AttributedTree {
    parse_document(NEWER_SAVE, "newer").unwrap()
}

fn older() -> AttributedTree {
    parse_document(OLDER_SAVE, "older").unwrap()
}

#[test]
fn test_absent_tree_is_parse_unavailable() {
    let tree = newer();
    let err = compare(Some(&tree), None, 3).unwrap_err();
    assert_eq!(
        err,
        HavenError::ParseUnavailable {
            side: "comparison".to_string()
        }
    );
    let ex: ExError = compare(None, Some(&tree), 3).unwrap_err().into();
    assert_eq!(ex.kind(), ExErrorKind::ParseUnavailable);
}

#[test]
fn test_identical_trees_are_compatible() {
    let result = compare(Some(&newer()), Some(&newer()), 3).unwrap();
    assert!(!result.has_differences());
    assert_eq!(
        result.notes,
        vec!["Save files appear to be structurally compatible.".to_string()]
    );
}

#[test]
fn test_versions_detected_for_both_sides() {
    let result = compare(Some(&newer()), Some(&older()), 3).unwrap();
    assert_eq!(result.baseline_version, "Alpha 20+");
    assert_eq!(result.comparison_version, "Alpha <20 (inferred)");
    assert_eq!(result.baseline_source, "newer");
}

#[test]
fn test_child_tag_deltas_at_shared_paths() {
    let result = compare(Some(&newer()), Some(&older()), 3).unwrap();

    assert!(result
        .missing_elements
        .contains(&"Element at root: <sectors>".to_string()));
    assert!(result
        .new_elements
        .contains(&"Element at root: <oldMarket>".to_string()));
    // ship children match, so nothing is reported below root/ships
    assert!(!result
        .missing_elements
        .iter()
        .chain(&result.new_elements)
        .any(|e| e.starts_with("Element at root/ships")));
}

#[test]
fn test_profile_level_deltas() {
    let result = compare(Some(&newer()), Some(&older()), 3).unwrap();

    assert!(result
        .missing_elements
        .contains(&"Root attribute: seed".to_string()));
    assert!(result
        .new_elements
        .contains(&"Root attribute: legacyFlag".to_string()));
    assert!(result
        .missing_elements
        .contains(&"Entity type: Derelict".to_string()));
    assert!(result
        .missing_elements
        .contains(&"Facility type: Reactor".to_string()));
    assert!(result.new_elements.contains(&"Facility type: Cot".to_string()));
}

#[test]
fn test_attribute_deltas_below_root() {
    let result = compare(Some(&newer()), Some(&older()), 3).unwrap();
    assert!(result
        .structural_diffs
        .contains(&"Attribute missing at root/gamedata: galaxyCount".to_string()));
    assert!(result
        .structural_diffs
        .contains(&"Attribute missing at root/ships/ship: sid".to_string()));
    assert!(result.needs_caution());
}

#[test]
fn test_id_remaps_old_and_new_names() {
    let result = compare(Some(&newer()), Some(&older()), 3).unwrap();
    assert_eq!(
        result.id_remaps,
        vec![IdRemap {
            id: "31".to_string(),
            old_name: "Cot".to_string(),
            new_name: "Bed".to_string(),
        }]
    );
}

#[test]
fn test_missing_grandchild_reported_at_its_own_path() {
    let baseline = AttributedTree::new(
        "b",
        Node::new("game").with_child(Node::new("a").with_child(Node::new("b").with_child(Node::new("c")))),
    );
    let other = AttributedTree::new(
        "o",
        Node::new("game").with_child(Node::new("a").with_child(Node::new("b"))),
    );

    let result = compare(Some(&baseline), Some(&other), 5).unwrap();

    assert_eq!(
        result.missing_elements,
        vec!["Element at root/a/b: <c>".to_string()]
    );
}

#[test]
fn test_depth_limit_hides_deeper_differences() {
    let baseline = AttributedTree::new(
        "b",
        Node::new("game").with_child(Node::new("a").with_child(Node::new("b").with_child(Node::new("c")))),
    );
    let other = AttributedTree::new(
        "o",
        Node::new("game").with_child(Node::new("a").with_child(Node::new("b"))),
    );

    let result = compare(Some(&baseline), Some(&other), 1).unwrap();

    assert!(result.missing_elements.is_empty());
}

#[test]
fn test_compare_all_uses_explicit_baseline_and_skips_backups() {
    let dir = tempfile::tempdir().unwrap();
    for (folder, text) in [("slot_new/save", NEWER_SAVE), ("slot_old/save", OLDER_SAVE), ("backup_x/save", OLDER_SAVE)] {
        let d = dir.path().join(folder);
        std::fs::create_dir_all(&d).unwrap();
        std::fs::write(d.join("game"), text).unwrap();
    }
    let baseline = dir.path().join("slot_new/save/game");

    let saves = find_save_files(dir.path()).unwrap();
    assert_eq!(saves.len(), 2);

    let batch = compare_all(dir.path(), Some(&baseline), 3).unwrap();

    assert_eq!(batch.baseline.as_deref(), Some(baseline.as_path()));
    assert_eq!(batch.comparisons.len(), 1);
    let comparison = batch
        .comparisons
        .get(&dir.path().join("slot_old/save/game"))
        .unwrap();
    assert_eq!(comparison.id_remaps.len(), 1);
    assert_eq!(batch.profiles.len(), 2);
}

#[test]
fn test_compare_all_records_unreadable_saves() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("a");
    let bad = dir.path().join("b");
    std::fs::create_dir_all(&good).unwrap();
    std::fs::create_dir_all(&bad).unwrap();
    std::fs::write(good.join("game"), NEWER_SAVE).unwrap();
    std::fs::write(bad.join("game"), "<game><unclosed></game>").unwrap();

    let batch = compare_all(dir.path(), Some(&good.join("game")), 3).unwrap();

    assert!(batch.comparisons.is_empty());
    assert_eq!(batch.failures.len(), 1);
    assert_eq!(batch.failures[0].0, bad.join("game"));
}

#[test]
fn test_compare_all_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let batch = compare_all(dir.path(), None, 3).unwrap();
    assert!(batch.baseline.is_none());
    assert!(batch.comparisons.is_empty());
}

#[test]
fn test_analysis_cache_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let profiles = [SaveProfile::analyze(&newer(), 3), SaveProfile::analyze(&older(), 3)];

    AnalysisCache::from_profiles(&profiles).save(&path).unwrap();
    let loaded = AnalysisCache::load(&path).unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.get("older").unwrap().id_counter, Some(400));
}

#[test]
fn test_analysis_cache_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let cache = AnalysisCache::load(&dir.path().join("none.json")).unwrap();
    assert!(cache.is_empty());
}

#[test]
fn test_analysis_cache_merge_keeps_other_saves_and_refreshes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    AnalysisCache::from_profiles(&[SaveProfile::analyze(&older(), 3)])
        .save(&path)
        .unwrap();

    let mut cache = AnalysisCache::load(&path).unwrap();
    let stamped = cache.timestamp;
    cache.merge(&[SaveProfile::analyze(&newer(), 3), SaveProfile::analyze(&older(), 3)]);

    assert_eq!(cache.len(), 2);
    assert!(cache.get("older").is_some());
    assert!(cache.get("newer").is_some());
    assert!(cache.timestamp >= stamped);
}
