#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::{TimeZone, Utc};
use common::{NEWER_SAVE, OLDER_SAVE};
use havensave_core::compare::{compare, generate_comparison_report, write_comparison_report};
use havensave_core::tree::parse_document;
use havensave_core::VersionComparison;

fn comparison(baseline: &str, other: &str) -> VersionComparison {
    let b = parse_document(baseline, "b").unwrap();
    let o = parse_document(other, "o").unwrap();
    compare(Some(&b), Some(&o), 3).unwrap()
}

fn render(c: &VersionComparison) -> String {
    generate_comparison_report(c, Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap())
}

#[test]
fn test_all_sections_present_in_order() {
    let report = render(&comparison(NEWER_SAVE, OLDER_SAVE));
    let headings = [
        "## Summary",
        "## Missing Elements",
        "## New Elements",
        "## ID Changes",
        "## Structural Differences",
        "## Migration Recommendations",
    ];
    let positions: Vec<usize> = headings.iter().map(|h| report.find(h).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(report.contains("**Generated**: 2024-06-01 08:30:00 UTC"));
}

#[test]
fn test_id_changes_rendered_as_table() {
    let report = render(&comparison(NEWER_SAVE, OLDER_SAVE));
    assert!(report.contains("| ID | Old Name | New Name |"));
    assert!(report.contains("| `31` | Cot | Bed |"));
}

#[test]
fn test_caution_branch_when_elements_missing() {
    let report = render(&comparison(NEWER_SAVE, OLDER_SAVE));
    assert!(report.contains("### Caution Required"));
    assert!(report.contains("- Element at root: <sectors>"));
}

#[test]
fn test_compatible_branch_when_identical() {
    let report = render(&comparison(NEWER_SAVE, NEWER_SAVE));
    assert!(!report.contains("Caution Required"));
    assert!(report.contains("The saves appear compatible."));
    assert!(report.contains("- Save files appear to be structurally compatible."));
    assert_eq!(report.matches("_None._").count(), 4);
}

#[test]
fn test_report_stable_for_fixed_timestamp() {
    let c = comparison(NEWER_SAVE, OLDER_SAVE);
    assert_eq!(render(&c), render(&c));
}

#[test]
fn test_write_comparison_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmp.md");
    write_comparison_report(&comparison(NEWER_SAVE, OLDER_SAVE), &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# Save Version Comparison Report"));
}
