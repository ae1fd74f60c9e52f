//! Compare commands
//!
//! Usage:
//!   havensave compare <BASELINE> <OTHER> [--depth <N>] [--out <PATH>]
//!   havensave compare-all <DIR> [--baseline <PATH>] [--cache <PATH>] [--reports <DIR>]

use super::CommandResult;
use chrono::Utc;
use clap::Args;
use havensave_core::compare::{
    compare, compare_all, generate_comparison_report, write_comparison_report, AnalysisCache,
};
use havensave_core::tree::load_document;
use havensave_core::Settings;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Reference save document (usually the newer one)
    pub baseline: PathBuf,

    /// Save document to compare against the baseline
    pub other: PathBuf,

    /// Structural summary depth (defaults to the configured depth)
    #[arg(long)]
    pub depth: Option<usize>,

    /// Write the report here instead of printing it
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CompareAllArgs {
    /// Directory holding save folders
    pub dir: PathBuf,

    /// Baseline save document (defaults to the most recently modified save)
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    /// Analysis cache (JSON); existing entries are kept and refreshed
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Write one comparison report per save into this directory
    #[arg(long)]
    pub reports: Option<PathBuf>,

    /// Structural summary depth (defaults to the configured depth)
    #[arg(long)]
    pub depth: Option<usize>,
}

/// Execute compare command
pub fn execute(args: CompareArgs, settings: &Settings) -> CommandResult {
    let baseline = load_document(&args.baseline)?;
    let other = load_document(&args.other)?;
    let depth = args.depth.unwrap_or(settings.compare_depth);

    let comparison = compare(Some(&baseline), Some(&other), depth)?;

    match args.out {
        Some(path) => {
            write_comparison_report(&comparison, &path)?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", generate_comparison_report(&comparison, Utc::now())),
    }
    Ok(())
}

/// Execute compare-all command
pub fn execute_all(args: CompareAllArgs, settings: &Settings) -> CommandResult {
    let depth = args.depth.unwrap_or(settings.compare_depth);
    let batch = compare_all(&args.dir, args.baseline.as_deref(), depth)?;

    let Some(baseline) = &batch.baseline else {
        println!("No saves found in {}", args.dir.display());
        return Ok(());
    };
    println!("Baseline: {}", baseline.display());

    if let Some(dir) = &args.reports {
        std::fs::create_dir_all(dir)?;
    }

    for (index, (path, comparison)) in batch.comparisons.iter().enumerate() {
        println!(
            "{}: {} missing, {} new, {} id changes, {} structural",
            path.display(),
            comparison.missing_elements.len(),
            comparison.new_elements.len(),
            comparison.id_remaps.len(),
            comparison.structural_diffs.len()
        );
        if let Some(dir) = &args.reports {
            let target = dir.join(format!("{}_comparison.md", save_name(path, index)));
            write_comparison_report(comparison, &target)?;
        }
    }
    for (path, reason) in &batch.failures {
        eprintln!("Skipped {}: {}", path.display(), reason);
    }

    if let Some(cache_path) = &args.cache {
        let mut cache = AnalysisCache::load(cache_path)?;
        let previous = cache.len();
        cache.merge(&batch.profiles);
        cache.save(cache_path)?;
        println!(
            "Analysis cache saved to {} ({} saves, {} previously cached)",
            cache_path.display(),
            cache.len(),
            previous
        );
    }
    Ok(())
}

/// Save folder name for `<folder>/save/game`
fn save_name(game_file: &Path, index: usize) -> String {
    game_file
        .parent()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("save_{}", index + 1))
}
