//! Comparing every save in a directory against one baseline.

use crate::compare::comparator::compare_profiles;
use crate::compare::model::VersionComparison;
use crate::errors::{HavenError, Result};
use crate::profile::SaveProfile;
use crate::tree::load_document;
use crate::{log_op_end, log_op_error, log_op_start};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

/// File name of the main save document inside a save folder
pub const SAVE_FILE_NAME: &str = "game";

/// Outcome of [`compare_all`].
#[derive(Debug, Clone, Default)]
pub struct BatchComparison {
    /// `None` when the directory holds no saves
    pub baseline: Option<PathBuf>,
    pub comparisons: BTreeMap<PathBuf, VersionComparison>,
    /// Saves that could not be loaded, with the reason
    pub failures: Vec<(PathBuf, String)>,
    /// Every profile built, baseline included
    pub profiles: Vec<SaveProfile>,
}

/// Every `game` file below `save_dir`, skipping anything under a path that
/// mentions "backup". Sorted for stable output.
///
/// # Errors
///
/// Returns `HavenError::Io` if `save_dir` cannot be read.
pub fn find_save_files(save_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect(save_dir, &mut found)?;
    found.retain(|p| !p.to_string_lossy().to_lowercase().contains("backup"));
    found.sort();
    Ok(found)
}

fn collect(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| HavenError::io("find_save_files", e))?;
    for entry in entries {
        let entry = entry.map_err(|e| HavenError::io("find_save_files", e))?;
        let path = entry.path();
        if path.is_dir() {
            collect(&path, found)?;
        } else if path.file_name().is_some_and(|n| n == SAVE_FILE_NAME) {
            found.push(path);
        }
    }
    Ok(())
}

fn modified(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Compare every save under `save_dir` against `baseline`, or against the
/// most recently modified save when no baseline is given.
///
/// A save that fails to load is recorded in `failures` and skipped.
///
/// # Errors
///
/// Fails if the directory cannot be walked or the baseline cannot be loaded.
pub fn compare_all(
    save_dir: &Path,
    baseline: Option<&Path>,
    max_depth: usize,
) -> Result<BatchComparison> {
    let start = Instant::now();
    log_op_start!("compare_all", source_id = %save_dir.display());

    let result = compare_all_inner(save_dir, baseline, max_depth);
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(batch) => {
            log_op_end!(
                "compare_all",
                duration_ms = duration_ms,
                compared = batch.comparisons.len() as u64,
                failed = batch.failures.len() as u64
            );
        }
        Err(err) => {
            log_op_error!("compare_all", err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

fn compare_all_inner(
    save_dir: &Path,
    baseline: Option<&Path>,
    max_depth: usize,
) -> Result<BatchComparison> {
    let saves = find_save_files(save_dir)?;
    let mut batch = BatchComparison::default();

    let baseline_path = match baseline {
        Some(p) => p.to_path_buf(),
        None => match saves.iter().max_by_key(|p| modified(p)) {
            Some(p) => p.clone(),
            None => return Ok(batch),
        },
    };
    tracing::info!(baseline = %baseline_path.display(), saves = saves.len(), "comparing saves");

    let baseline_profile = SaveProfile::analyze(&load_document(&baseline_path)?, max_depth);

    for save in saves.iter().filter(|p| **p != baseline_path) {
        match load_document(save) {
            Ok(tree) => {
                let profile = SaveProfile::analyze(&tree, max_depth);
                batch
                    .comparisons
                    .insert(save.clone(), compare_profiles(&baseline_profile, &profile));
                batch.profiles.push(profile);
            }
            Err(err) => {
                tracing::warn!(path = %save.display(), error = %err, "skipping unreadable save");
                batch.failures.push((save.clone(), err.to_string()));
            }
        }
    }

    batch.profiles.insert(0, baseline_profile);
    batch.baseline = Some(baseline_path);
    Ok(batch)
}

/// JSON cache of analyzed profiles, keyed by source id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisCache {
    pub timestamp: DateTime<Utc>,
    pub saves: BTreeMap<String, SaveProfile>,
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            saves: BTreeMap::new(),
        }
    }
}

impl AnalysisCache {
    pub fn from_profiles<'a>(profiles: impl IntoIterator<Item = &'a SaveProfile>) -> Self {
        let mut cache = Self::default();
        for profile in profiles {
            cache.record(profile.clone());
        }
        cache
    }

    pub fn record(&mut self, profile: SaveProfile) {
        self.saves.insert(profile.source_id.clone(), profile);
    }

    /// Record fresh profiles over existing entries and restamp the cache
    pub fn merge<'a>(&mut self, profiles: impl IntoIterator<Item = &'a SaveProfile>) {
        for profile in profiles {
            self.record(profile.clone());
        }
        self.timestamp = Utc::now();
    }

    pub fn get(&self, source_id: &str) -> Option<&SaveProfile> {
        self.saves.get(source_id)
    }

    pub fn len(&self) -> usize {
        self.saves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }

    /// Write the cache as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// `Serialization` or `Io` on failure.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| HavenError::io("save_analysis_cache", e))?;
        tracing::info!(path = %path.display(), saves = self.len(), "analysis cache saved");
        Ok(())
    }

    /// Load a cache; a missing file yields an empty cache
    ///
    /// # Errors
    ///
    /// `Io` if the file exists but cannot be read, `Serialization` if it is
    /// not a valid cache.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "analysis cache not found");
            return Ok(Self::default());
        }
        let text =
            fs::read_to_string(path).map_err(|e| HavenError::io("load_analysis_cache", e))?;
        let cache: Self = serde_json::from_str(&text)?;
        tracing::info!(path = %path.display(), saves = cache.len(), "analysis cache loaded");
        Ok(cache)
    }
}
