//! Backup commands
//!
//! Usage:
//!   havensave backup create [<SOURCE>] [--force]
//!   havensave backup list
//!   havensave backup prune [--keep <DAYS>] [--dry-run]
//!   havensave backup restore <ARCHIVE> <TARGET>

use super::CommandResult;
use clap::{Args, Subcommand};
use havensave_core::Settings;
use havensave_store::{BackupManager, BackupOutcome};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    /// Backup root (defaults to the configured backup folder)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: BackupCommand,
}

#[derive(Debug, Subcommand)]
pub enum BackupCommand {
    /// Archive a save directory into a dated snapshot
    Create {
        /// Directory to archive (defaults to the last used save folder)
        source: Option<PathBuf>,

        /// Write a new snapshot even if one exists for today
        #[arg(long)]
        force: bool,
    },

    /// List snapshots, newest date first
    List,

    /// Remove snapshots outside the retention window
    Prune {
        /// Number of most recent backup dates to keep (defaults to the configured count)
        #[arg(long)]
        keep: Option<usize>,

        /// Report what would be removed without deleting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Extract a snapshot into a directory
    Restore {
        /// Archive to extract
        archive: PathBuf,

        /// Directory to extract into
        target: PathBuf,
    },
}

/// Execute backup command
pub fn execute(args: BackupArgs, settings: &Settings) -> CommandResult {
    let root = args.root.unwrap_or_else(|| settings.backup_folder.clone());
    let manager = BackupManager::new(root, settings.backup_count)?;

    match args.command {
        BackupCommand::Create { source, force } => {
            let source = source
                .or_else(|| settings.last_used_folder.clone())
                .ok_or("no source directory given and no last used folder configured")?;
            match manager.create_backup(&source, force)? {
                BackupOutcome::Created(path) => println!("Created {}", path.display()),
                BackupOutcome::Existing(path) => {
                    println!("Backup for today already exists: {}", path.display())
                }
            }
        }
        BackupCommand::List => {
            let entries = manager.list_backups()?;
            if entries.is_empty() {
                println!("No backups in {}", manager.root().display());
                return Ok(());
            }
            for entry in &entries {
                println!("{}", entry);
            }
            println!(
                "{} backups over {} dates, {} bytes total",
                entries.len(),
                manager.list_dates()?.len(),
                manager.total_size()?
            );
        }
        BackupCommand::Prune { keep, dry_run } => {
            let report = manager.prune(keep, dry_run)?;
            let verb = if report.dry_run { "Would remove" } else { "Removed" };
            for path in &report.removed {
                println!("{} {}", verb, path.display());
            }
            for failure in &report.failures {
                eprintln!("Warning: {}", failure);
            }
            println!("{} {} backups", verb, report.removed.len());
        }
        BackupCommand::Restore { archive, target } => {
            manager.restore(&archive, &target)?;
            println!("Restored {} to {}", archive.display(), target.display());
        }
    }
    Ok(())
}
