//! Markdown and plain-text rendering of scan results.

use crate::errors::{HavenError, Result};
use crate::scan::model::{ScanCategory, ScanResult, UnknownItem};
use chrono::{Local, SecondsFormat};
use std::path::{Path, PathBuf};

/// Render the full Markdown report for a scan.
///
/// Pure function of `result`: the same result always yields the same text.
/// Categories appear sorted by name, identifiers ascending within each.
pub fn generate_report(result: &ScanResult) -> String {
    let mut out = String::new();

    out.push_str("# Unknown IDs Report\n\n");
    out.push_str(&format!("- **Source**: {}\n", result.source_id));
    out.push_str(&format!(
        "- **Scanned at**: {}\n\n",
        result
            .scanned_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    ));

    out.push_str("## Summary\n\n");
    out.push_str(&format!(
        "- Total IDs found: {}\n- Known IDs: {}\n- Unknown IDs (distinct): {}\n- Unknown occurrences: {}\n\n",
        result.total_ids_found,
        result.known_count,
        result.unknown_count(),
        result.unknown_occurrences()
    ));

    if result.is_clean() {
        out.push_str("_No unknown IDs detected._\n");
        return out;
    }

    let sorted = result.sorted_unknowns();
    let mut current: Option<ScanCategory> = None;
    for item in sorted {
        if current != Some(item.category) {
            out.push_str(&format!(
                "## {} ({})\n\n",
                item.category.heading(),
                count_in(result, item.category)
            ));
            current = Some(item.category);
        }
        push_item(&mut out, item);
    }
    out
}

fn count_in(result: &ScanResult, category: ScanCategory) -> usize {
    result
        .unknown_items
        .iter()
        .filter(|i| i.category == category)
        .count()
}

fn push_item(out: &mut String, item: &UnknownItem) {
    out.push_str(&format!("- **ID {}**\n", item.id_value));
    out.push_str(&format!("  - Tag: `<{}>`\n", item.tag));
    out.push_str(&format!("  - Attributes: `{}`\n", item.attributes));
    out.push_str(&format!("  - Occurrences: {}\n", item.occurrences));
    out.push_str(&format!("  - Location: `{}`\n\n", item.path));
}

/// Short plain-text summary for terminal output
pub fn render_summary(result: &ScanResult) -> String {
    let mut out = format!(
        "Scanned {}: {} IDs ({} known, {} unknown in {} occurrences)\n",
        result.source_id,
        result.total_ids_found,
        result.known_count,
        result.unknown_count(),
        result.unknown_occurrences()
    );
    for item in result.sorted_unknowns() {
        out.push_str(&format!(
            "  [{}] {} <{}> x{}\n",
            item.category, item.id_value, item.tag, item.occurrences
        ));
    }
    out
}

/// Default file name for a report written now
pub fn default_report_name() -> String {
    format!(
        "unknown_ids_report_{}.md",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Write the Markdown report to `output`, or to a timestamped file in the
/// current directory.
///
/// # Errors
///
/// Returns `HavenError::Io` when the file cannot be written.
pub fn write_report(result: &ScanResult, output: Option<&Path>) -> Result<PathBuf> {
    let path = match output {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(default_report_name()),
    };
    std::fs::write(&path, generate_report(result))
        .map_err(|e| HavenError::io("write_report", e))?;
    tracing::info!(path = %path.display(), "scan report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_name_shape() {
        let name = default_report_name();
        assert!(name.starts_with("unknown_ids_report_"));
        assert!(name.ends_with(".md"));
        assert_eq!(name.len(), "unknown_ids_report_20240601_120000.md".len());
    }
}
