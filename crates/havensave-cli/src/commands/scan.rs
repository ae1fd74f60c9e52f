//! Scan command
//!
//! Usage: havensave scan <FILE> [--catalog <PATH>] [--report [<PATH>]]

use super::CommandResult;
use clap::Args;
use havensave_core::scan::{render_summary, scan_file, write_report};
use havensave_core::config::BackupMode;
use havensave_core::{ReferenceCatalog, Settings};
use havensave_store::{folder_for_game, BackupManager};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Save document to scan (usually `<save folder>/save/game`)
    pub file: PathBuf,

    /// Catalog override (TOML); defaults to the configured catalog, then the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Write the Markdown report; without a path a timestamped file is created
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    pub report: Option<Option<PathBuf>>,
}

/// Execute scan command
pub fn execute(args: ScanArgs, settings: &Settings) -> CommandResult {
    let loaded;
    let catalog = match args.catalog.as_ref().or(settings.catalog_path.as_ref()) {
        Some(path) => {
            loaded = ReferenceCatalog::load(path)?;
            &loaded
        }
        None => ReferenceCatalog::builtin(),
    };

    if settings.auto_backup == BackupMode::Auto {
        auto_backup(&args.file, settings);
    }

    let result = scan_file(&args.file, catalog)?;
    print!("{}", render_summary(&result));

    if let Some(target) = args.report {
        let written = write_report(&result, target.as_deref())?;
        println!("Report written to {}", written.display());
    }
    Ok(())
}

/// Back up the folder holding `game_file` before it is read. Failures are
/// reported and the scan goes ahead.
fn auto_backup(game_file: &Path, settings: &Settings) {
    let Ok(game_file) = std::fs::canonicalize(game_file) else {
        return;
    };
    let Some(folder) = folder_for_game(&game_file) else {
        return;
    };
    let outcome = BackupManager::new(&settings.backup_folder, settings.backup_count)
        .and_then(|manager| manager.create_backup(folder, false));
    match outcome {
        Ok(outcome) if outcome.is_created() => {
            println!("Backed up {} to {}", folder.display(), outcome.path().display());
        }
        Ok(_) => {}
        Err(e) => eprintln!("Warning: automatic backup failed: {}", e),
    }
}
