//! Markdown rendering of a [`VersionComparison`].

use crate::compare::model::VersionComparison;
use crate::errors::{HavenError, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Render the comparison report.
///
/// Every section is always present so reports diff cleanly against each
/// other; empty sections say so. The recommendation text branches on
/// [`VersionComparison::needs_caution`].
pub fn generate_comparison_report(
    comparison: &VersionComparison,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    out.push_str("# Save Version Comparison Report\n\n");
    out.push_str(&format!(
        "**Generated**: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out.push_str("## Files Compared\n\n");
    out.push_str(&format!(
        "- **Baseline (newer)**: `{}`\n  - Version: {}\n",
        comparison.baseline_source, comparison.baseline_version
    ));
    out.push_str(&format!(
        "- **Comparison (older)**: `{}`\n  - Version: {}\n\n",
        comparison.comparison_source, comparison.comparison_version
    ));

    out.push_str("## Summary\n\n");
    for note in &comparison.notes {
        out.push_str(&format!("- {}\n", note));
    }
    out.push('\n');

    out.push_str("## Missing Elements\n\n");
    out.push_str("Present in the baseline but missing from the older save:\n\n");
    push_list(&mut out, &comparison.missing_elements);

    out.push_str("## New Elements\n\n");
    out.push_str("Present only in the older save (possibly deprecated):\n\n");
    push_list(&mut out, &comparison.new_elements);

    out.push_str("## ID Changes\n\n");
    if comparison.id_remaps.is_empty() {
        out.push_str("_None._\n\n");
    } else {
        out.push_str("| ID | Old Name | New Name |\n|----|----------|----------|\n");
        let mut remaps: Vec<_> = comparison.id_remaps.iter().collect();
        remaps.sort();
        for remap in remaps {
            out.push_str(&format!(
                "| `{}` | {} | {} |\n",
                remap.id, remap.old_name, remap.new_name
            ));
        }
        out.push('\n');
    }

    out.push_str("## Structural Differences\n\n");
    push_list(&mut out, &comparison.structural_diffs);

    out.push_str("## Migration Recommendations\n\n");
    if comparison.needs_caution() {
        out.push_str("### Caution Required\n\n");
        out.push_str(
            "The older save differs significantly from the baseline version. Before migrating:\n\n\
             1. **Back up first**: keep the original save folder\n\
             2. **Test carefully**: load the save and check that all systems work\n\
             3. **Expect issues**: some features may not behave correctly\n\
             4. **Manual fixes**: missing elements may have to be added by hand\n",
        );
    } else {
        out.push_str(
            "The saves appear compatible. Migration should be relatively safe; back up first anyway.\n",
        );
    }
    out
}

fn push_list(out: &mut String, entries: &[String]) {
    if entries.is_empty() {
        out.push_str("_None._\n\n");
        return;
    }
    let mut sorted: Vec<&String> = entries.iter().collect();
    sorted.sort();
    for entry in sorted {
        out.push_str(&format!("- {}\n", entry));
    }
    out.push('\n');
}

/// Render and write the report to `path`
///
/// # Errors
///
/// Returns `HavenError::Io` when the file cannot be written.
pub fn write_comparison_report(comparison: &VersionComparison, path: &Path) -> Result<()> {
    std::fs::write(path, generate_comparison_report(comparison, Utc::now()))
        .map_err(|e| HavenError::io("write_comparison_report", e))?;
    tracing::info!(path = %path.display(), "comparison report written");
    Ok(())
}
