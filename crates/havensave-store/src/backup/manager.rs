//! Backup creation, listing, pruning and restore for one backup root.
//!
//! The manager assumes a single writer per root: callers serialize
//! `create_backup` and `prune`. Listing may run concurrently with a write and
//! will simply not see the archive until its rename lands.

use crate::backup::archive::{extract_zip, write_zip};
use crate::backup::atomic::write_atomically;
use crate::backup::clock::{Clock, SystemClock};
use crate::backup::entry::BackupEntry;
use crate::backup::naming::archive_name;
use crate::errors::{
    archive_missing, archive_write, delete_error, invalid_input, io_error, source_missing, Result,
};
use crate::save_folder::read_version_tag;
use chrono::NaiveDate;
use havensave_core::errors::ExError;
use havensave_core::{log_op_end, log_op_error, log_op_start};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of [`BackupManager::create_backup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// A new archive was written
    Created(PathBuf),
    /// A backup for today already existed and was returned unchanged
    Existing(PathBuf),
}

impl BackupOutcome {
    pub fn path(&self) -> &Path {
        match self {
            BackupOutcome::Created(p) | BackupOutcome::Existing(p) => p,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, BackupOutcome::Created(_))
    }
}

/// Result of [`BackupManager::prune`].
#[derive(Debug, Default)]
pub struct PruneReport {
    /// Archives removed, or that would be removed on a dry run
    pub removed: Vec<PathBuf>,
    /// Archives that could not be deleted; they stay on disk
    pub failures: Vec<ExError>,
    pub dry_run: bool,
}

/// Manages dated archive snapshots of save folders under one root.
#[derive(Debug, Clone)]
pub struct BackupManager<C: Clock = SystemClock> {
    root: PathBuf,
    keep_days: usize,
    clock: C,
}

impl BackupManager<SystemClock> {
    /// Manager dating archives by the local calendar
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `keep_days` is zero, `Io` if the root cannot be created.
    pub fn new(root: impl Into<PathBuf>, keep_days: usize) -> Result<Self> {
        Self::with_clock(root, keep_days, SystemClock)
    }
}

impl<C: Clock> BackupManager<C> {
    /// # Errors
    ///
    /// `InvalidInput` if `keep_days` is zero, `Io` if the root cannot be created.
    pub fn with_clock(root: impl Into<PathBuf>, keep_days: usize, clock: C) -> Result<Self> {
        if keep_days == 0 {
            return Err(invalid_input("backup_manager", "keep_days must be at least 1"));
        }
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| io_error("create_backup_root", e))?;
        Ok(Self {
            root,
            keep_days,
            clock,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Default retention used by `prune(None, ..)`
    pub fn keep_days(&self) -> usize {
        self.keep_days
    }

    /// Archive `source_dir` as today's backup.
    ///
    /// Unless `force_new` is set, an existing backup for today (the lowest
    /// sequence) is returned instead of writing another one.
    ///
    /// # Errors
    ///
    /// `SourceMissing` if `source_dir` does not exist, `ArchiveWrite` if the
    /// archive cannot be written. A failed write leaves no archive behind.
    pub fn create_backup(&self, source_dir: &Path, force_new: bool) -> Result<BackupOutcome> {
        let start = Instant::now();
        log_op_start!("create_backup", source_id = %source_dir.display(), force_new = force_new);

        let result = self.create_backup_inner(source_dir, force_new);
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(outcome) => {
                log_op_end!(
                    "create_backup",
                    duration_ms = duration_ms,
                    archive = %outcome.path().display(),
                    created = outcome.is_created()
                );
            }
            Err(err) => {
                log_op_error!("create_backup", err.clone(), duration_ms = duration_ms);
            }
        }
        result
    }

    fn create_backup_inner(&self, source_dir: &Path, force_new: bool) -> Result<BackupOutcome> {
        if !source_dir.is_dir() {
            return Err(source_missing(source_dir));
        }
        // Entry names are taken relative to the parent, so `.` and `..`
        // components must be resolved first.
        let source_dir = fs::canonicalize(source_dir).map_err(|_| source_missing(source_dir))?;
        let source_dir = source_dir.as_path();

        let today = self.clock.today();
        let existing = self.backups_for_date(today)?;
        if let (Some(first), false) = (existing.first(), force_new) {
            tracing::info!(archive = %first.file_name(), "backup already exists for today");
            return Ok(BackupOutcome::Existing(first.archive_path.clone()));
        }

        let version = read_version_tag(source_dir);
        let mut sequence = existing.iter().map(|e| e.sequence).max().unwrap_or(0) + 1;
        let mut target = self
            .root
            .join(archive_name(today, sequence, version.as_deref()));
        while target.exists() {
            sequence += 1;
            target = self
                .root
                .join(archive_name(today, sequence, version.as_deref()));
        }

        let mut stored = 0;
        write_atomically(
            &target,
            |file| {
                let (file, files) = write_zip(source_dir, file, &target)?;
                stored = files;
                Ok(file)
            },
            |e| archive_write(&target, e),
        )?;

        tracing::info!(archive = %target.display(), files = stored, "backup created");
        Ok(BackupOutcome::Created(target))
    }

    /// Every archive in the root, newest date first, ascending sequence within a date
    ///
    /// # Errors
    ///
    /// `Io` if the root cannot be read.
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&self.root).map_err(|e| io_error("list_backups", e))? {
            let dir_entry = dir_entry.map_err(|e| io_error("list_backups", e))?;
            let Ok(metadata) = dir_entry.metadata() else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }
            if let Some(entry) = BackupEntry::from_path(&dir_entry.path(), metadata.len()) {
                entries.push(entry);
            }
        }
        entries.sort_by(|a, b| a.listing_order(b));
        Ok(entries)
    }

    /// Distinct backup dates, newest first
    ///
    /// # Errors
    ///
    /// `Io` if the root cannot be read.
    pub fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        let dates: BTreeSet<NaiveDate> = self.list_backups()?.iter().map(|e| e.date).collect();
        Ok(dates.into_iter().rev().collect())
    }

    /// Archives for one date, ascending sequence
    ///
    /// # Errors
    ///
    /// `Io` if the root cannot be read.
    pub fn backups_for_date(&self, date: NaiveDate) -> Result<Vec<BackupEntry>> {
        Ok(self
            .list_backups()?
            .into_iter()
            .filter(|e| e.date == date)
            .collect())
    }

    /// Combined size of all archives in bytes
    ///
    /// # Errors
    ///
    /// `Io` if the root cannot be read.
    pub fn total_size(&self) -> Result<u64> {
        Ok(self.list_backups()?.iter().map(|e| e.size_bytes).sum())
    }

    /// Remove every archive dated outside the `keep_days` most recent dates.
    ///
    /// `None` uses the manager's retention. With `dry_run` nothing is deleted
    /// and `removed` lists what would be. Individual deletion failures are
    /// collected in `failures` and do not stop the rest of the prune.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a zero retention, `Io` if the root cannot be read.
    pub fn prune(&self, keep_days: Option<usize>, dry_run: bool) -> Result<PruneReport> {
        let start = Instant::now();
        let keep = keep_days.unwrap_or(self.keep_days);
        log_op_start!("prune", keep_days = keep as u64, dry_run = dry_run);

        let result = self.prune_inner(keep, dry_run);
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(report) => {
                log_op_end!(
                    "prune",
                    duration_ms = duration_ms,
                    removed = report.removed.len() as u64,
                    failed = report.failures.len() as u64
                );
            }
            Err(err) => {
                log_op_error!("prune", err.clone(), duration_ms = duration_ms);
            }
        }
        result
    }

    fn prune_inner(&self, keep: usize, dry_run: bool) -> Result<PruneReport> {
        if keep == 0 {
            return Err(invalid_input("prune", "keep_days must be at least 1"));
        }

        let entries = self.list_backups()?;
        let dates: Vec<NaiveDate> = {
            let unique: BTreeSet<NaiveDate> = entries.iter().map(|e| e.date).collect();
            unique.into_iter().rev().collect()
        };

        let mut report = PruneReport {
            dry_run,
            ..PruneReport::default()
        };

        if dates.len() <= keep {
            tracing::info!(dates = dates.len(), keep_days = keep, "nothing to prune");
            return Ok(report);
        }

        let expired: BTreeSet<NaiveDate> = dates[keep..].iter().copied().collect();
        for entry in entries.iter().filter(|e| expired.contains(&e.date)) {
            if dry_run {
                tracing::info!(archive = %entry.file_name(), "would delete backup");
                report.removed.push(entry.archive_path.clone());
                continue;
            }
            match fs::remove_file(&entry.archive_path) {
                Ok(()) => {
                    tracing::info!(archive = %entry.file_name(), "deleted old backup");
                    report.removed.push(entry.archive_path.clone());
                }
                Err(e) => {
                    let err = delete_error(&entry.archive_path, e);
                    tracing::error!(archive = %entry.file_name(), error = %err, "failed to delete backup");
                    report.failures.push(err);
                }
            }
        }
        Ok(report)
    }

    /// Extract `archive` under `target_dir`.
    ///
    /// # Errors
    ///
    /// `ArchiveMissing` if the archive does not exist, `Extract` if it cannot
    /// be read or unpacked.
    pub fn restore(&self, archive: &Path, target_dir: &Path) -> Result<()> {
        let start = Instant::now();
        log_op_start!("restore", archive = %archive.display());

        let result = if archive.is_file() {
            extract_zip(archive, target_dir)
        } else {
            Err(archive_missing(archive))
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        match result {
            Ok(entries) => {
                tracing::info!(restored_to = %target_dir.display(), entries = entries, "backup restored");
                log_op_end!("restore", duration_ms = duration_ms);
                Ok(())
            }
            Err(err) => {
                log_op_error!("restore", err.clone(), duration_ms = duration_ms);
                Err(err)
            }
        }
    }
}
